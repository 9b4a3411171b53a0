//! Prefix extractors for Domino console lines.
//!
//! A console line may start with a bracketed thread id and then a
//! timestamp:
//!
//! ```text
//! [0A1C:0002-0B2F] 03/14/2024 09:26:53 AM  Database Server started
//! ```
//!
//! Each extractor looks only at the start of its input and, when it
//! matches, hands back the field together with the rest of the line. When
//! it does not match it returns an empty field and the input untouched, so
//! the extractors can be chained without checking each result.

mod thread_id;
mod timestamp;

pub use thread_id::ThreadIdExtractor;
pub use timestamp::{TimestampExtractor, TimestampFormat, DEFAULT_STALE_AFTER};
