/// Syslog severity levels used when forwarding Domino output
use std::fmt;
use strum_macros::IntoStaticStr;

/// The eight syslog severities, most severe first.
///
/// Ordering follows the syslog numeric code, so `Severity::Critical <
/// Severity::Warning`. The classifier only produces `Critical`, `Error`,
/// `Warning` and `Informational`; the rest exist so the sink can express any
/// level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    IntoStaticStr,
)]
pub enum Severity {
    #[strum(serialize = "emerg")]
    Emergency = 0,
    #[strum(serialize = "alert")]
    Alert = 1,
    #[strum(serialize = "crit")]
    Critical = 2,
    #[strum(serialize = "err")]
    Error = 3,
    #[strum(serialize = "warning")]
    Warning = 4,
    #[strum(serialize = "notice")]
    Notice = 5,
    #[default]
    #[strum(serialize = "info")]
    Informational = 6,
    #[strum(serialize = "debug")]
    Debug = 7,
}

impl Severity {
    /// The syslog keyword, e.g. `"crit"`.
    pub fn keyword(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
