//! Request header storage.
//!
//! [`HttpHeaders`] keeps two mappings: one keyed by [`HttpHeader`] for the
//! known header names, and one keyed by the raw name string for everything
//! else (custom headers). A header line always lands in exactly one of them.
//!
//! Values are split on commas when a line is parsed, so a single line may
//! contribute several values. This applies to every header, including those
//! whose values legitimately contain commas (dates, cookies). Accessors such
//! as [`HttpHeaders::get_date`] undo the split where they need the full value.
//!
//! Both mappings are ordered maps so that serialization follows the order in
//! which headers were first seen.
//!
//! The store does no validation of names or values, and nothing is ever
//! removed from it: values are only appended.

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::time::SystemTime;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::http::header::HttpHeader;
use crate::http::parser::HeaderParser;

pub const HEADER_DELIMITER: char = ':';
pub const VALUE_DELIMITER: char = ',';
pub const COOKIE_DELIMITER: char = ';';

/// Errors raised by the typed accessors of [`HttpHeaders`].
#[derive(Debug)]
pub enum HeaderError {
    InvalidContentLength {
        value: String,
        source: ParseIntError,
    },
    InvalidDate {
        header: HttpHeader,
        value: String,
        source: httpdate::Error,
    },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::InvalidContentLength { value, .. } => {
                write!(f, "invalid Content-Length value: {:?}", value)
            }
            HeaderError::InvalidDate { header, value, .. } => {
                write!(f, "invalid HTTP date in {}: {:?}", header, value)
            }
        }
    }
}

impl Error for HeaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HeaderError::InvalidContentLength { source, .. } => Some(source),
            HeaderError::InvalidDate { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    known: IndexMap<HttpHeader, Vec<String>>,
    custom: IndexMap<String, Vec<String>>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw `Name: value` lines, without line terminators.
    ///
    /// Lines without a colon are dropped. Never fails.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        HeaderParser::default().parse_lines(lines)
    }

    /// Classifies one raw header line into the store.
    ///
    /// A line without a colon is dropped.
    pub(crate) fn push_line(&mut self, line: &str) {
        let Some((name, value)) = line.split_once(HEADER_DELIMITER) else {
            debug!("Dropping header line without delimiter: {:?}", line);
            return;
        };

        let name = name.trim();
        let values = split_values(value.trim());

        match HttpHeader::from_name(name) {
            Some(header) => {
                trace!("Known header {}: {:?}", header, values);
                self.known.entry(header).or_default().extend(values);
            }
            None => {
                trace!("Custom header {}: {:?}", name, values);
                self.custom.entry(name.to_string()).or_default().extend(values);
            }
        }
    }

    pub fn add_header(&mut self, header: HttpHeader, value: &str) {
        self.known.entry(header).or_default().push(value.to_string());
    }

    pub fn add_custom_header(&mut self, name: &str, value: &str) {
        self.custom
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Appends `time` formatted as an IMF-fixdate.
    pub fn add_date(&mut self, header: HttpHeader, time: SystemTime) {
        self.add_header(header, &httpdate::fmt_http_date(time));
    }

    pub fn get_header_values(&self, header: HttpHeader) -> &[String] {
        self.known.get(&header).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Custom header names are matched exactly, case included.
    pub fn get_custom_header_values(&self, name: &str) -> &[String] {
        self.custom.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_header(&self, header: HttpHeader) -> Option<&str> {
        self.get_header_values(header).first().map(String::as_str)
    }

    pub fn get_custom_header(&self, name: &str) -> Option<&str> {
        self.get_custom_header_values(name)
            .first()
            .map(String::as_str)
    }

    /// First `Content-Length` value as a byte count.
    ///
    /// A value that is not a non-negative integer is reported as
    /// [`HeaderError::InvalidContentLength`].
    pub fn get_content_length(&self) -> Result<Option<u64>, HeaderError> {
        self.get_header(HttpHeader::ContentLength)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|source| HeaderError::InvalidContentLength {
                        value: value.to_string(),
                        source,
                    })
            })
            .transpose()
    }

    /// Looks up `cookie_name` in the first `Cookie` value.
    pub fn get_cookie(&self, cookie_name: &str) -> Option<&str> {
        let cookie_header = self.get_header(HttpHeader::Cookie)?;
        let prefix = format!("{}=", cookie_name);

        cookie_header
            .split(COOKIE_DELIMITER)
            .map(str::trim)
            .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
    }

    /// Reads the first date of an HTTP-date header.
    ///
    /// A parsed date is split in two at its comma, so when the first value
    /// is not a full date on its own it is joined back with the second one.
    /// Values appended with [`HttpHeaders::add_date`] are never split.
    pub fn get_date(&self, header: HttpHeader) -> Result<Option<SystemTime>, HeaderError> {
        let values = self.get_header_values(header);
        let Some(first) = values.first() else {
            return Ok(None);
        };

        if let Ok(time) = httpdate::parse_http_date(first) {
            return Ok(Some(time));
        }

        let value = values[..values.len().min(2)].join(", ");
        match httpdate::parse_http_date(&value) {
            Ok(time) => Ok(Some(time)),
            Err(source) => Err(HeaderError::InvalidDate {
                header,
                value,
                source,
            }),
        }
    }

    /// True once the header has been seen, even if no value was kept for it.
    pub fn contains_header(&self, header: HttpHeader) -> bool {
        self.known.contains_key(&header)
    }

    pub fn contains_custom_header(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    pub fn known(&self) -> impl Iterator<Item = (HttpHeader, &[String])> {
        self.known.iter().map(|(h, v)| (*h, v.as_slice()))
    }

    pub fn custom(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.custom.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.custom.is_empty()
    }

    /// Serializes the headers as `Name: value\r\n` lines.
    ///
    /// Known headers come first, in the order they were first added, followed
    /// by custom headers. Multiple values are joined with `", "`, except for
    /// `Set-Cookie` which gets one line per value.
    ///
    /// `Set-Cookie` values added with [`HttpHeaders::add_header`] are written
    /// as given. A parsed `Set-Cookie` line was split on its commas like any
    /// other header, so an attribute such as `Expires=Wed, 21 Oct 2015 ...`
    /// comes back as two lines. Build response cookies with `add_header`.
    pub fn stringify(&self) -> String {
        let mut result = String::new();

        for (header, values) in &self.known {
            if values.is_empty() {
                continue;
            }
            if *header == HttpHeader::SetCookie {
                for value in values {
                    result.push_str(&format!("{}: {}\r\n", header, value));
                }
            } else {
                result.push_str(&format!("{}: {}\r\n", header, values.join(", ")));
            }
        }

        for (name, values) in &self.custom {
            if values.is_empty() {
                continue;
            }
            result.push_str(&format!("{}: {}\r\n", name, values.join(", ")));
        }

        result
    }
}

/// Splits a trimmed header value on commas and trims each token.
///
/// Trailing empty tokens left by a trailing comma are dropped, but a value
/// without any comma always yields exactly one token, even when empty.
fn split_values(value: &str) -> Vec<String> {
    let mut tokens: Vec<&str> = value.split(VALUE_DELIMITER).collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }
    tokens.into_iter().map(|t| t.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn sample() -> HttpHeaders {
        HttpHeaders::from_lines([
            "Content-Type: text/html;charset=UTF-8",
            "cookie: JSESSIONID=hhhh",
            "Cache-Control: no-cache, no-store, must-revalidate",
        ])
    }

    #[test]
    fn test_parse_known_headers() {
        let headers = sample();

        assert_eq!(
            headers.get_header(HttpHeader::ContentType),
            Some("text/html;charset=UTF-8")
        );
        assert_eq!(
            headers.get_header_values(HttpHeader::CacheControl),
            ["no-cache", "no-store", "must-revalidate"]
        );
        assert_eq!(headers.get_cookie("JSESSIONID"), Some("hhhh"));
    }

    #[test]
    fn test_parse_custom_header() {
        let headers = HttpHeaders::from_lines(["sec-ch-ua-mobile: ?0"]);

        assert!(headers.known().next().is_none());
        assert_eq!(headers.get_custom_header("sec-ch-ua-mobile"), Some("?0"));
        // exact match only
        assert_eq!(headers.get_custom_header("Sec-CH-UA-Mobile"), None);
    }

    #[test]
    fn test_line_without_colon_is_dropped() {
        let headers = HttpHeaders::from_lines(["malformed-line-no-colon"]);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_value_without_space_after_colon() {
        let headers = HttpHeaders::from_lines(["Host:localhost:8080"]);
        assert_eq!(headers.get_header(HttpHeader::Host), Some("localhost:8080"));
    }

    #[test]
    fn test_missing_headers_are_absent() {
        let headers = sample();

        assert!(headers.get_header_values(HttpHeader::Host).is_empty());
        assert!(headers.get_custom_header_values("x-missing").is_empty());
        assert_eq!(headers.get_header(HttpHeader::Host), None);
        assert_eq!(headers.get_custom_header("x-missing"), None);
        assert!(!headers.contains_header(HttpHeader::Host));
        assert!(!headers.contains_custom_header("x-missing"));
    }

    #[test]
    fn test_repeated_lines_accumulate() {
        let headers = HttpHeaders::from_lines(["Accept: text/html", "accept: application/json"]);
        assert_eq!(
            headers.get_header_values(HttpHeader::Accept),
            ["text/html", "application/json"]
        );
    }

    #[test]
    fn test_trailing_comma_keeps_key_without_values() {
        let headers = HttpHeaders::from_lines(["X-Empty:,", "Vary: Accept,"]);

        assert!(headers.contains_custom_header("X-Empty"));
        assert!(headers.get_custom_header_values("X-Empty").is_empty());
        assert_eq!(headers.get_custom_header("X-Empty"), None);
        assert_eq!(headers.get_header_values(HttpHeader::Vary), ["Accept"]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let headers = HttpHeaders::from_lines(["X-Blank:"]);
        assert_eq!(headers.get_custom_header("X-Blank"), Some(""));
    }

    #[test]
    fn test_add_after_parse_appends() {
        let mut headers = sample();
        headers.add_header(HttpHeader::CacheControl, "private");
        headers.add_custom_header("X-Request-Id", "42");
        headers.add_custom_header("X-Request-Id", "43");

        assert_eq!(
            headers.get_header_values(HttpHeader::CacheControl),
            ["no-cache", "no-store", "must-revalidate", "private"]
        );
        assert_eq!(headers.get_custom_header_values("X-Request-Id"), ["42", "43"]);
        assert_eq!(headers.get_custom_header("X-Request-Id"), Some("42"));
    }

    #[test]
    fn test_content_length() {
        let headers = HttpHeaders::from_lines(["Content-Length: 1024"]);
        assert_eq!(headers.get_content_length().unwrap(), Some(1024));

        assert_eq!(sample().get_content_length().unwrap(), None);
    }

    #[test]
    fn test_invalid_content_length_is_an_error() {
        for raw in ["Content-Length: abc", "Content-Length: -1", "Content-Length:"] {
            let headers = HttpHeaders::from_lines([raw]);
            assert!(matches!(
                headers.get_content_length(),
                Err(HeaderError::InvalidContentLength { .. })
            ));
        }
    }

    #[test]
    fn test_cookie_lookup() {
        let headers = HttpHeaders::from_lines(["Cookie: theme=dark; JSESSIONID=abc; lang=fr"]);

        assert_eq!(headers.get_cookie("JSESSIONID"), Some("abc"));
        assert_eq!(headers.get_cookie("lang"), Some("fr"));
        assert_eq!(headers.get_cookie("SESSION"), None);
        assert_eq!(headers.get_cookie("JSESSION"), None);
        assert_eq!(HttpHeaders::new().get_cookie("JSESSIONID"), None);
    }

    #[test]
    fn test_cookie_with_comma_is_split() {
        let headers = HttpHeaders::from_lines(["Cookie: a=1, b=2"]);

        assert_eq!(headers.get_cookie("a"), Some("1"));
        assert_eq!(headers.get_cookie("b"), None);
    }

    #[test]
    fn test_date_is_rejoined() {
        let headers = HttpHeaders::from_lines(["Date: Sun, 06 Nov 1994 08:49:37 GMT"]);

        assert_eq!(headers.get_header_values(HttpHeader::Date).len(), 2);
        assert_eq!(
            headers.get_date(HttpHeader::Date).unwrap(),
            Some(UNIX_EPOCH + Duration::from_secs(784111777))
        );
        assert_eq!(headers.get_date(HttpHeader::Expires).unwrap(), None);
    }

    #[test]
    fn test_add_date() {
        let mut headers = HttpHeaders::new();
        let time = UNIX_EPOCH + Duration::from_secs(784111777);
        headers.add_date(HttpHeader::LastModified, time);

        assert_eq!(
            headers.get_header(HttpHeader::LastModified),
            Some("Sun, 06 Nov 1994 08:49:37 GMT")
        );
        assert_eq!(headers.get_date(HttpHeader::LastModified).unwrap(), Some(time));
    }

    #[test]
    fn test_date_added_twice_reads_first() {
        let mut headers = HttpHeaders::new();
        let first = UNIX_EPOCH + Duration::from_secs(784111777);
        let second = first + Duration::from_secs(60);
        headers.add_date(HttpHeader::Date, first);
        headers.add_date(HttpHeader::Date, second);

        assert_eq!(headers.get_header_values(HttpHeader::Date).len(), 2);
        assert_eq!(headers.get_date(HttpHeader::Date).unwrap(), Some(first));
    }

    #[test]
    fn test_two_parsed_date_lines_read_first() {
        let headers = HttpHeaders::from_lines([
            "Date: Sun, 06 Nov 1994 08:49:37 GMT",
            "date: Mon, 07 Nov 1994 08:49:37 GMT",
        ]);

        assert_eq!(headers.get_header_values(HttpHeader::Date).len(), 4);
        assert_eq!(
            headers.get_date(HttpHeader::Date).unwrap(),
            Some(UNIX_EPOCH + Duration::from_secs(784111777))
        );
    }

    #[test]
    fn test_added_date_then_parsed_line() {
        let mut headers = HttpHeaders::from_lines(["Expires: Mon, 07 Nov 1994 08:49:37 GMT"]);
        headers.add_date(HttpHeader::Expires, UNIX_EPOCH);

        assert_eq!(
            headers.get_date(HttpHeader::Expires).unwrap(),
            Some(UNIX_EPOCH + Duration::from_secs(784111777 + 86400))
        );
    }

    #[test]
    fn test_set_cookie_added_with_comma_stays_one_line() {
        let mut headers = HttpHeaders::new();
        headers.add_header(HttpHeader::SetCookie, "id=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT");

        assert_eq!(
            headers.stringify(),
            "Set-Cookie: id=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT\r\n"
        );
    }

    #[test]
    fn test_parsed_set_cookie_with_comma_is_split() {
        let headers =
            HttpHeaders::from_lines(["Set-Cookie: id=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT"]);

        assert_eq!(
            headers.stringify(),
            "Set-Cookie: id=1; Expires=Wed\r\nSet-Cookie: 21 Oct 2015 07:28:00 GMT\r\n"
        );
    }

    #[test]
    fn test_invalid_date() {
        let headers = HttpHeaders::from_lines(["If-Modified-Since: yesterday"]);
        assert!(matches!(
            headers.get_date(HttpHeader::IfModifiedSince),
            Err(HeaderError::InvalidDate { header: HttpHeader::IfModifiedSince, .. })
        ));
    }

    #[test]
    fn test_stringify() {
        let mut headers = HttpHeaders::from_lines([
            "X-Trace: a, b",
            "Content-Type: text/plain",
            "Cache-Control: no-cache, no-store",
        ]);
        headers.add_header(HttpHeader::SetCookie, "id=1");
        headers.add_header(HttpHeader::SetCookie, "theme=dark");

        assert_eq!(
            headers.stringify(),
            "Content-Type: text/plain\r\n\
             Cache-Control: no-cache, no-store\r\n\
             Set-Cookie: id=1\r\n\
             Set-Cookie: theme=dark\r\n\
             X-Trace: a, b\r\n"
        );
    }

    #[test]
    fn test_error_display() {
        let err = HttpHeaders::from_lines(["Content-Length: ten"])
            .get_content_length()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid Content-Length value: \"ten\"");
        assert!(err.source().is_some());
    }
}
