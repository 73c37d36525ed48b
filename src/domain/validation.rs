#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} out of range: {actual} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
        actual: u8,
    },

    #[error("invalid phone number: {input}")]
    InvalidPhoneNumber { input: String },

    #[error("{field} is not an absolute http(s) url: {input}")]
    InvalidUrl { field: &'static str, input: String },

    #[error("unknown delivery receipt method: {input} (expected GET or POST)")]
    UnknownDlrMethod { input: String },
}
