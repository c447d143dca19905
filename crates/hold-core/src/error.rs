use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoldError>;

/// Errors surfaced by the strict parsing and rules-loading paths.
///
/// The computation itself never fails; these exist for callers that want
/// to report bad input instead of silently defaulting it.
#[derive(Debug, Error)]
pub enum HoldError {
    #[error("invalid {field}: {value:?} is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("invalid wind {0:?}: expected DIR/SPEED")]
    MalformedWind(String),

    #[error("unknown input field {0:?}")]
    UnknownField(String),

    #[error("unknown command {0:?}: expected field=value, show, reset or quit")]
    UnknownCommand(String),

    #[error("invalid rule: {0}")]
    InvalidRule(String),

    #[error("rules format error: {0}")]
    Json(#[from] serde_json::Error),
}
