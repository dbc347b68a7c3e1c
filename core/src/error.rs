use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid generator config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Ring {ring} has an empty target list")]
    NoTargets { ring: u32 },

    #[error("Invariant '{check}' violated: {detail}")]
    InvariantViolation { check: &'static str, detail: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
