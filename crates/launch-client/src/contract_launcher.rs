//! alloy-backed [`TokenLauncher`]: one `launchToken` transaction per call, then wait for its receipt.

use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use alloy::sol;
use alloy::transports::http::reqwest::Url;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::config::LauncherConfig;
use crate::error::SubmissionError;
use crate::types::{LaunchRequest, LaunchResult};
use crate::TokenLauncher;

sol! {
    #[sol(rpc)]
    interface ILaunchpad {
        function launchToken(string name, string symbol, uint256 supply) external returns (address);
    }
}

/// Submits launches to the launchpad contract with a local signing key.
///
/// Built once at startup; the provider and wallet are shared read-only by all concurrent launches.
pub struct ContractLauncher {
    provider: DynProvider,
    contract_address: Address,
    signer_address: Address,
    confirmations: u64,
    confirmation_timeout: Option<Duration>,
}

impl ContractLauncher {
    /// Validates the key, contract address and RPC URL and builds a signing provider. Does not touch the network.
    pub fn new(config: &LauncherConfig) -> anyhow::Result<Self> {
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .context("PRIVATE_KEY is not a valid secp256k1 private key")?;
        let contract_address: Address = config
            .contract_address
            .parse()
            .with_context(|| format!("CONTRACT_ADDRESS is not a valid address: {}", config.contract_address))?;
        let rpc_url: Url = config
            .rpc_url
            .parse()
            .with_context(|| format!("RPC_URL is not a valid URL: {}", config.rpc_url))?;

        let signer_address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();

        Ok(Self::with_provider(
            provider,
            contract_address,
            signer_address,
            config.confirmations,
            config.confirmation_timeout(),
        ))
    }

    /// Uses an already built provider. `signer_address` is only reported, the provider does the signing.
    pub fn with_provider(
        provider: DynProvider,
        contract_address: Address,
        signer_address: Address,
        confirmations: u64,
        confirmation_timeout: Option<Duration>,
    ) -> Self {
        Self {
            provider,
            contract_address,
            signer_address,
            confirmations,
            confirmation_timeout,
        }
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Address of the wallet that signs and pays for launches.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }
}

#[async_trait]
impl TokenLauncher for ContractLauncher {
    #[instrument(skip(self, request), fields(name = %request.name(), symbol = %request.symbol()))]
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchResult, SubmissionError> {
        let contract = ILaunchpad::new(self.contract_address, &self.provider);

        let pending = contract
            .launchToken(
                request.name().to_string(),
                request.symbol().to_string(),
                request.supply(),
            )
            .send()
            .await
            .map_err(|e| SubmissionError::Send(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        info!(tx_hash = %tx_hash, "launchToken transaction sent, waiting for receipt");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.confirmation_timeout)
            .get_receipt()
            .await
            .map_err(|e| SubmissionError::Confirmation(e.to_string()))?;

        let log_addresses: Vec<Address> = receipt
            .inner
            .logs()
            .iter()
            .map(|log| log.inner.address)
            .collect();

        let result =
            launch_result_from_receipt(receipt.status(), receipt.transaction_hash, &log_addresses);
        match &result {
            Ok(r) => info!(
                tx_hash = %r.transaction_hash(),
                token_address = %r.token_address(),
                log_count = log_addresses.len(),
                "launchToken confirmed"
            ),
            Err(e) => warn!(tx_hash = %tx_hash, error = %e, "launchToken not usable"),
        }
        result
    }
}

/// Interprets a confirmed receipt. The token address is taken from the first log, whatever event it is.
pub fn launch_result_from_receipt(
    success: bool,
    tx_hash: TxHash,
    log_addresses: &[Address],
) -> Result<LaunchResult, SubmissionError> {
    if !success {
        return Err(SubmissionError::Reverted(tx_hash));
    }
    let token_address = log_addresses
        .first()
        .copied()
        .ok_or(SubmissionError::MissingLogs(tx_hash))?;
    Ok(LaunchResult::new(token_address, tx_hash))
}
