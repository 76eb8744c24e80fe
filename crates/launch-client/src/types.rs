//! Launch request / result / outcome.

use alloy::primitives::{Address, TxHash, U256};

use crate::error::{ParseError, SubmissionError};
use crate::parser::format_supply;

/// A validated launch command. Only constructed by [`crate::parse_launch_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub(crate) name: String,
    pub(crate) symbol: String,
    /// Supply scaled by 10^18.
    pub(crate) supply: U256,
    /// The trimmed numeral as the user typed it.
    pub(crate) supply_text: String,
}

impl LaunchRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// On-chain supply (numeral × 10^18).
    pub fn supply(&self) -> U256 {
        self.supply
    }

    /// Supply exactly as entered (trimmed), used in replies.
    pub fn supply_text(&self) -> &str {
        &self.supply_text
    }

    /// Supply rendered back in whole-token units with trailing zeros removed, e.g. `1000000000` or `0.5`.
    pub fn supply_units(&self) -> String {
        format_supply(self.supply)
    }
}

/// A confirmed launch: the new token's address and the launch transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchResult {
    token_address: Address,
    transaction_hash: TxHash,
}

impl LaunchResult {
    pub fn new(token_address: Address, transaction_hash: TxHash) -> Self {
        Self {
            token_address,
            transaction_hash,
        }
    }

    pub fn token_address(&self) -> Address {
        self.token_address
    }

    pub fn transaction_hash(&self) -> TxHash {
        self.transaction_hash
    }
}

/// Result of handling one launch command; rendered once into a chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success {
        request: LaunchRequest,
        result: LaunchResult,
    },
    ValidationError(ParseError),
    SubmissionError(SubmissionError),
}
