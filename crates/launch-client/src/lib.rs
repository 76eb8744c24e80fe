//! # Launch client
//!
//! Turns `Name|Symbol|Supply` text into a [`LaunchRequest`] and submits it through a [`TokenLauncher`].
//! [`ContractLauncher`] is the alloy implementation that calls `launchToken` on the launchpad contract;
//! tests substitute their own [`TokenLauncher`].

mod config;
mod contract_launcher;
mod error;
mod parser;
mod types;

use async_trait::async_trait;

pub use config::{LauncherConfig, DEFAULT_RPC_URL};
pub use contract_launcher::{launch_result_from_receipt, ContractLauncher};
pub use error::{ParseError, SubmissionError};
pub use parser::{format_supply, parse_launch_request, parse_supply, SEPARATOR, SUPPLY_DECIMALS};
pub use types::{LaunchOutcome, LaunchRequest, LaunchResult};

pub use alloy::primitives::{Address, TxHash, U256};

/// Submits one token launch and resolves once the network has confirmed it.
///
/// Implementations attempt exactly one on-chain submission per call and never retry.
#[async_trait]
pub trait TokenLauncher: Send + Sync {
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchResult, SubmissionError>;
}
