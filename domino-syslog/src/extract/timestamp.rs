/// Timestamp prefix extraction and staleness check
use crate::encoding::latin1_to_string;
use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use regex::bytes::Regex;
use std::time::Duration;

/// How far a console timestamp may drift from the wall clock before it is
/// kept in the forwarded message.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(90 * 60);

/// US English with ISO dates. Any other locale gets the US layout.
const ISO_LOCALE: &str = "en_dk.utf-8";

/// The two date layouts Domino prints, picked from the server's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `MM/DD/YYYY HH:MM:SS AM`
    #[default]
    Us,
    /// `YYYY/MM/DD HH:MM:SS AM`
    Iso,
}

impl TimestampFormat {
    /// Select the layout from a locale string such as the value of `LC_ALL`.
    pub fn from_locale(locale: Option<&str>) -> Self {
        match locale {
            Some(locale) if locale.eq_ignore_ascii_case(ISO_LOCALE) => TimestampFormat::Iso,
            _ => TimestampFormat::Us,
        }
    }

    /// The chrono format string for this layout.
    pub fn chrono_format(self) -> &'static str {
        match self {
            TimestampFormat::Us => "%m/%d/%Y %I:%M:%S %p",
            TimestampFormat::Iso => "%Y/%m/%d %I:%M:%S %p",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::Us => {
                r"(?-u)^(\d\d/\d\d/\d\d\d\d\s+\d\d:\d\d:\d\d\s+[AP]M)\s+"
            }
            TimestampFormat::Iso => {
                r"(?-u)^(\d\d\d\d/\d\d/\d\d\s+\d\d:\d\d:\d\d\s+[AP]M)\s+"
            }
        }
    }
}

/// Strips a leading timestamp and decides whether it is worth keeping.
///
/// Syslog stamps every message on arrival, so a console timestamp close to
/// the current time adds nothing and is dropped. One that is further off
/// than `stale_after` (in either direction) points at a skewed clock or a
/// replayed log and is returned exactly as Domino printed it.
#[derive(Debug, Clone)]
pub struct TimestampExtractor {
    format: TimestampFormat,
    stale_after: Duration,
    re: Regex,
}

impl TimestampExtractor {
    pub fn new(format: TimestampFormat, stale_after: Duration) -> Result<Self> {
        let pattern = format.pattern();
        let re = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            format,
            stale_after,
            re,
        })
    }

    pub fn format(&self) -> TimestampFormat {
        self.format
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Extract relative to the current wall-clock time.
    pub fn extract<'a>(&self, data: &'a [u8]) -> (String, &'a [u8]) {
        self.extract_at(data, Local::now())
    }

    /// Extract relative to `now`.
    ///
    /// A matched prefix is always consumed, even when it fails to parse; the
    /// parse error goes to the diagnostic log and the field comes back empty.
    pub fn extract_at<'a>(&self, data: &'a [u8], now: DateTime<Local>) -> (String, &'a [u8]) {
        let Some(caps) = self.re.captures(data) else {
            return (String::new(), data);
        };
        let (Some(whole), Some(stamp)) = (caps.get(0), caps.get(1)) else {
            return (String::new(), data);
        };
        let rest = data.get(whole.end()..).unwrap_or_default();
        let text = latin1_to_string(stamp.as_bytes());

        match self.parse(&text) {
            Ok(when) if self.is_stale(when, now) => (text, rest),
            Ok(_) => (String::new(), rest),
            Err(e) => {
                log::warn!("couldn't parse timestamp {text}: {e}");
                (String::new(), rest)
            }
        }
    }

    /// Parse a timestamp in the local time zone.
    pub fn parse(&self, text: &str) -> std::result::Result<DateTime<Local>, String> {
        // The pattern allows runs of whitespace between the parts
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let naive = NaiveDateTime::parse_from_str(&normalized, self.format.chrono_format())
            .map_err(|e| e.to_string())?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| format!("{normalized} does not exist in the local time zone"))
    }

    fn is_stale(&self, when: DateTime<Local>, now: DateTime<Local>) -> bool {
        match now.signed_duration_since(when).abs().to_std() {
            Ok(skew) => skew > self.stale_after,
            Err(_) => true,
        }
    }
}
