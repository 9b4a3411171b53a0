/// Thread id prefix extraction
use crate::encoding::latin1_to_string;
use crate::error::{Error, Result};
use regex::bytes::Regex;

const THREAD_ID_PATTERN: &str = r"(?-u)^\[([A-Z\d:-]+)\]\s+";

/// Strips a leading `[THREAD-ID]` and the whitespace after it.
#[derive(Debug, Clone)]
pub struct ThreadIdExtractor {
    re: Regex,
}

impl ThreadIdExtractor {
    pub fn new() -> Result<Self> {
        let re = Regex::new(THREAD_ID_PATTERN).map_err(|source| Error::Pattern {
            pattern: THREAD_ID_PATTERN.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// Returns the bracketed id and the remainder after the whitespace, or
    /// `("", data)` when the line has no thread id.
    pub fn extract<'a>(&self, data: &'a [u8]) -> (String, &'a [u8]) {
        let Some(caps) = self.re.captures(data) else {
            return (String::new(), data);
        };
        let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
            return (String::new(), data);
        };
        let rest = data.get(whole.end()..).unwrap_or_default();
        (latin1_to_string(id.as_bytes()), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ThreadIdExtractor {
        ThreadIdExtractor::new().expect("thread id pattern compiles")
    }

    #[test]
    fn test_extracts_id_and_remainder() {
        let (id, rest) = extractor().extract(b"[0A1C:0002-0B2F] Server started");
        assert_eq!(id, "0A1C:0002-0B2F");
        assert_eq!(rest, b"Server started");
    }

    #[test]
    fn test_consumes_all_whitespace_after_bracket() {
        let (id, rest) = extractor().extract(b"[A1]  \t message");
        assert_eq!(id, "A1");
        assert_eq!(rest, b"message");
    }

    #[test]
    fn test_no_whitespace_is_not_a_match() {
        let input: &[u8] = b"[A1B2]message";
        let (id, rest) = extractor().extract(input);
        assert!(id.is_empty());
        assert_eq!(rest, input);
    }

    #[test]
    fn test_lowercase_is_not_a_match() {
        let input: &[u8] = b"[abc] message";
        let (id, rest) = extractor().extract(input);
        assert!(id.is_empty());
        assert_eq!(rest, input);
    }

    #[test]
    fn test_empty_brackets_are_not_a_match() {
        let input: &[u8] = b"[] message";
        let (id, rest) = extractor().extract(input);
        assert!(id.is_empty());
        assert_eq!(rest, input);
    }

    #[test]
    fn test_must_be_anchored() {
        let input: &[u8] = b"Task [A1B2] message";
        let (id, rest) = extractor().extract(input);
        assert!(id.is_empty());
        assert_eq!(rest, input);
    }

    #[test]
    fn test_only_whitespace_after_id_leaves_empty_remainder() {
        let (id, rest) = extractor().extract(b"[12:34] ");
        assert_eq!(id, "12:34");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_prefix_is_reconstructable() {
        let input: &[u8] = b"[A1B2-3:4] rest of line";
        let (id, rest) = extractor().extract(input);
        let rebuilt = format!("[{id}] {}", String::from_utf8_lossy(rest));
        assert_eq!(rebuilt.as_bytes(), input);
    }
}
