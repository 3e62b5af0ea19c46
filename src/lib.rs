//! In-memory storage for HTTP request headers.
//!
//! The HTTP connection reader hands over the raw `Name: value` lines of a
//! request; [`HttpHeaders`] classifies them into known headers
//! ([`HttpHeader`]) and custom headers, and exposes lookups over both.
//!
//! ```
//! use rustyheaders::{HttpHeader, HttpHeaders};
//!
//! let headers = HttpHeaders::from_lines([
//!     "Content-Length: 12",
//!     "Cookie: JSESSIONID=abc; theme=dark",
//!     "X-Request-Id: 7",
//! ]);
//!
//! assert_eq!(headers.get_content_length().unwrap(), Some(12));
//! assert_eq!(headers.get_cookie("theme"), Some("dark"));
//! assert_eq!(headers.get_custom_header("X-Request-Id"), Some("7"));
//! assert!(!headers.contains_header(HttpHeader::Host));
//! ```
//!
//! A store is built per request and is not synchronized; share it behind a
//! `Mutex` if several threads need to append to it.

pub mod config;
pub mod http;

pub use config::HeadersConfig;
pub use http::{HeaderError, HeaderParser, HttpHeader, HttpHeaders};
