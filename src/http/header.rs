//! Known HTTP header names.
//!
//! [`HttpHeader`] is the closed set of header names that
//! [`HttpHeaders`](crate::http::headers::HttpHeaders) stores in its typed
//! mapping. Anything that does not resolve here is kept as a custom header.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Common request and response headers, spelled canonically by [`HttpHeader::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpHeader {
    Accept,
    AcceptCharset,
    AcceptEncoding,
    AcceptLanguage,
    AcceptRanges,
    AccessControlAllowOrigin,
    Age,
    Allow,
    Authorization,
    CacheControl,
    Connection,
    ContentDisposition,
    ContentEncoding,
    ContentLanguage,
    ContentLength,
    ContentLocation,
    ContentRange,
    ContentType,
    Cookie,
    Date,
    ETag,
    Expect,
    Expires,
    Forwarded,
    From,
    Host,
    IfMatch,
    IfModifiedSince,
    IfNoneMatch,
    IfRange,
    IfUnmodifiedSince,
    KeepAlive,
    LastModified,
    Location,
    Origin,
    Pragma,
    ProxyAuthorization,
    Range,
    Referer,
    RetryAfter,
    Server,
    SetCookie,
    TE,
    Trailer,
    TransferEncoding,
    Upgrade,
    UserAgent,
    Vary,
    Via,
    WwwAuthenticate,
}

impl HttpHeader {
    pub const ALL: [HttpHeader; 50] = [
        HttpHeader::Accept,
        HttpHeader::AcceptCharset,
        HttpHeader::AcceptEncoding,
        HttpHeader::AcceptLanguage,
        HttpHeader::AcceptRanges,
        HttpHeader::AccessControlAllowOrigin,
        HttpHeader::Age,
        HttpHeader::Allow,
        HttpHeader::Authorization,
        HttpHeader::CacheControl,
        HttpHeader::Connection,
        HttpHeader::ContentDisposition,
        HttpHeader::ContentEncoding,
        HttpHeader::ContentLanguage,
        HttpHeader::ContentLength,
        HttpHeader::ContentLocation,
        HttpHeader::ContentRange,
        HttpHeader::ContentType,
        HttpHeader::Cookie,
        HttpHeader::Date,
        HttpHeader::ETag,
        HttpHeader::Expect,
        HttpHeader::Expires,
        HttpHeader::Forwarded,
        HttpHeader::From,
        HttpHeader::Host,
        HttpHeader::IfMatch,
        HttpHeader::IfModifiedSince,
        HttpHeader::IfNoneMatch,
        HttpHeader::IfRange,
        HttpHeader::IfUnmodifiedSince,
        HttpHeader::KeepAlive,
        HttpHeader::LastModified,
        HttpHeader::Location,
        HttpHeader::Origin,
        HttpHeader::Pragma,
        HttpHeader::ProxyAuthorization,
        HttpHeader::Range,
        HttpHeader::Referer,
        HttpHeader::RetryAfter,
        HttpHeader::Server,
        HttpHeader::SetCookie,
        HttpHeader::TE,
        HttpHeader::Trailer,
        HttpHeader::TransferEncoding,
        HttpHeader::Upgrade,
        HttpHeader::UserAgent,
        HttpHeader::Vary,
        HttpHeader::Via,
        HttpHeader::WwwAuthenticate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpHeader::Accept => "Accept",
            HttpHeader::AcceptCharset => "Accept-Charset",
            HttpHeader::AcceptEncoding => "Accept-Encoding",
            HttpHeader::AcceptLanguage => "Accept-Language",
            HttpHeader::AcceptRanges => "Accept-Ranges",
            HttpHeader::AccessControlAllowOrigin => "Access-Control-Allow-Origin",
            HttpHeader::Age => "Age",
            HttpHeader::Allow => "Allow",
            HttpHeader::Authorization => "Authorization",
            HttpHeader::CacheControl => "Cache-Control",
            HttpHeader::Connection => "Connection",
            HttpHeader::ContentDisposition => "Content-Disposition",
            HttpHeader::ContentEncoding => "Content-Encoding",
            HttpHeader::ContentLanguage => "Content-Language",
            HttpHeader::ContentLength => "Content-Length",
            HttpHeader::ContentLocation => "Content-Location",
            HttpHeader::ContentRange => "Content-Range",
            HttpHeader::ContentType => "Content-Type",
            HttpHeader::Cookie => "Cookie",
            HttpHeader::Date => "Date",
            HttpHeader::ETag => "ETag",
            HttpHeader::Expect => "Expect",
            HttpHeader::Expires => "Expires",
            HttpHeader::Forwarded => "Forwarded",
            HttpHeader::From => "From",
            HttpHeader::Host => "Host",
            HttpHeader::IfMatch => "If-Match",
            HttpHeader::IfModifiedSince => "If-Modified-Since",
            HttpHeader::IfNoneMatch => "If-None-Match",
            HttpHeader::IfRange => "If-Range",
            HttpHeader::IfUnmodifiedSince => "If-Unmodified-Since",
            HttpHeader::KeepAlive => "Keep-Alive",
            HttpHeader::LastModified => "Last-Modified",
            HttpHeader::Location => "Location",
            HttpHeader::Origin => "Origin",
            HttpHeader::Pragma => "Pragma",
            HttpHeader::ProxyAuthorization => "Proxy-Authorization",
            HttpHeader::Range => "Range",
            HttpHeader::Referer => "Referer",
            HttpHeader::RetryAfter => "Retry-After",
            HttpHeader::Server => "Server",
            HttpHeader::SetCookie => "Set-Cookie",
            HttpHeader::TE => "TE",
            HttpHeader::Trailer => "Trailer",
            HttpHeader::TransferEncoding => "Transfer-Encoding",
            HttpHeader::Upgrade => "Upgrade",
            HttpHeader::UserAgent => "User-Agent",
            HttpHeader::Vary => "Vary",
            HttpHeader::Via => "Via",
            HttpHeader::WwwAuthenticate => "WWW-Authenticate",
        }
    }

    /// Resolves a header name, ignoring ASCII case.
    ///
    /// Returns `None` for names outside the known set; the caller is expected
    /// to keep those as custom headers.
    pub fn from_name(name: &str) -> Option<HttpHeader> {
        BY_LOWERCASE_NAME
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }
}

// Lowercased canonical name -> header
static BY_LOWERCASE_NAME: Lazy<HashMap<String, HttpHeader>> = Lazy::new(|| {
    HttpHeader::ALL
        .iter()
        .map(|h| (h.as_str().to_ascii_lowercase(), *h))
        .collect()
});

impl fmt::Display for HttpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
