use log::warn;

use crate::config::HeadersConfig;
use crate::http::headers::HttpHeaders;

/// Builds [`HttpHeaders`] from raw header lines, applying the limits of a
/// [`HeadersConfig`].
///
/// Lines that exceed a limit are skipped the same way malformed lines are:
/// parsing never fails.
#[derive(Debug, Clone, Default)]
pub struct HeaderParser {
    config: HeadersConfig,
}

impl HeaderParser {
    pub fn new(config: HeadersConfig) -> Self {
        Self { config }
    }

    pub fn parse_lines<I, S>(&self, lines: I) -> HttpHeaders
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut headers = HttpHeaders::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();

            if let Some(max_lines) = self.config.max_lines {
                if idx >= max_lines {
                    warn!("Header line limit ({}) reached, ignoring remaining lines", max_lines);
                    break;
                }
            }

            if let Some(max_len) = self.config.max_line_length {
                if line.len() > max_len {
                    warn!(
                        "Ignoring header line of {} bytes (limit {})",
                        line.len(),
                        max_len
                    );
                    continue;
                }
            }

            headers.push_line(line);
        }

        headers
    }

    /// Parses a raw header section.
    ///
    /// Lines are separated by `\n` with an optional preceding `\r`. The
    /// section ends at the first empty line; anything after it is ignored.
    pub fn parse_block(&self, block: &str) -> HttpHeaders {
        let lines = block
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .take_while(|line| !line.is_empty());

        self.parse_lines(lines)
    }
}
