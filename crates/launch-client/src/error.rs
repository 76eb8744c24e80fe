//! Error types for parsing launch commands and submitting launches.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Malformed `Name|Symbol|Supply` input. Recoverable; the user gets a fixed format hint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("separator '|' not found")]
    MissingSeparator,

    #[error("expected 3 segments, got {0}")]
    SegmentCount(usize),

    #[error("{0} is empty")]
    EmptySegment(&'static str),

    #[error("supply is not a non-negative decimal number: {0:?}")]
    InvalidSupply(String),

    #[error("supply has more than {max} decimal places")]
    TooManyDecimals { max: usize },

    #[error("supply does not fit in 256 bits")]
    SupplyOverflow,
}

/// Failure of the launch transaction. Recoverable; the cause is logged, the user gets a generic reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("failed to send launchToken transaction: {0}")]
    Send(String),

    #[error("failed waiting for confirmation: {0}")]
    Confirmation(String),

    #[error("transaction {0} reverted")]
    Reverted(TxHash),

    #[error("transaction {0} confirmed without any logs")]
    MissingLogs(TxHash),
}
