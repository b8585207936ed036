// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    /// Submission was attempted with no eligible rows. Blocks before any
    /// network call is made.
    #[error("add items before saving")]
    EmptyBill,

    #[error("row not found")]
    RowNotFound,

    /// The persistence service answered, but not with an "ok" status.
    #[error("could not save bill")]
    SaveFailed,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl BillingError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        BillingError::MalformedResponse(msg.into())
    }
}
