use thiserror::Error;

/// Structural and data errors raised by the simulation engine.
///
/// Variant names follow the error taxonomy of the simulator's design
/// rather than any particular original implementation's naming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("{what} requires a non-empty identifier")]
    MissingId { what: &'static str },

    #[error("{what} has no {reference} attached")]
    NullReference {
        what: String,
        reference: &'static str,
    },

    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{what} requires a positive size, got {value}")]
    NegativeRange { what: &'static str, value: i64 },

    #[error("{raw:?} is not a valid logic value (expected 0, 1, 2, X or x)")]
    UnknownLogicValue { raw: String },

    #[error("gate {gate} has invalid delay {delay} (must be >= 1)")]
    InvalidDelay { gate: String, delay: i64 },

    #[error("pad state {0:?} was read before any value was ever written to it")]
    EmptyStateTable(String),

    #[error("no {kind} named {id:?} exists in this circuit")]
    ElementNotFound { kind: &'static str, id: String },

    #[error("gate {0:?} has no inputs connected")]
    NoInputs(String),

    #[error("gate {0:?} has no output net connected")]
    NoOutput(String),

    #[error("gate {gate:?} declared with invalid arity: {kind} expects {expected}, got {actual}")]
    InvalidArity {
        gate: String,
        kind: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("stimulus references pad {pad:?}, which does not exist in this circuit")]
    SchemaMismatch { pad: String },
}
