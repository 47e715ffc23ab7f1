use thiserror::Error;

/// Errors raised while reading calculator input.
///
/// The rule engine itself never fails; only the input layer does.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid calculator input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Unknown win type: {0}")]
    UnknownWinType(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
