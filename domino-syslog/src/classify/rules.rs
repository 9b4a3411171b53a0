use crate::severity::Severity;

/// Built-in Domino console rules. Order is priority: earlier rules win.
pub const DOMINO_RULES: &[(&str, Severity)] = &[
    (
        "Access control is set in .* to not allow replication from",
        Severity::Error,
    ),
    (
        "Access control is set in .* to not replicate",
        Severity::Warning,
    ),
    ("not authorized to", Severity::Warning),
    ("Unable to find path to server.", Severity::Critical),
    ("No route is known from this host to ", Severity::Critical),
    ("The server is not responding", Severity::Critical),
    ("Server not reachable on Cluster Port", Severity::Critical),
    (
        "Full text operations on database .* which is not full text indexed",
        Severity::Warning,
    ),
    ("ATTEMPT TO ACCESS SERVER by .* was denied", Severity::Error),
    ("Directory Assistance could not", Severity::Error),
    ("Corrupt Data Exception", Severity::Error),
    ("Couldn't find design note", Severity::Error),
    (r"\berror\b", Severity::Error),
    ("Warning:", Severity::Warning),
];
