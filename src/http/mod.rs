pub mod header;
pub mod headers;
pub mod parser;

pub use header::HttpHeader;
pub use headers::{HeaderError, HttpHeaders};
pub use parser::HeaderParser;
