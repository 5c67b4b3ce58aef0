use thiserror::Error;

/// A record from the catalog API that does not satisfy the domain schema.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{kind} record is missing an id")]
    MissingId { kind: &'static str },

    #[error("{kind} {id} is missing {field}")]
    MissingField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("{kind} {id} has an empty {field}")]
    EmptyField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("{kind} {id} has a negative {field} ({value})")]
    Negative {
        kind: &'static str,
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{kind} {id} has an out-of-range {field} ({value})")]
    OutOfRange {
        kind: &'static str,
        id: String,
        field: &'static str,
        value: i64,
    },

    #[error("{kind} {id} has a non-finite {field}")]
    NotFinite {
        kind: &'static str,
        id: String,
        field: &'static str,
    },
}
