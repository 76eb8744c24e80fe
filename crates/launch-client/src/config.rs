//! Launcher config: RPC endpoint, signing key, launchpad contract, confirmation policy.
//! Loaded from env: RPC_URL, PRIVATE_KEY, CONTRACT_ADDRESS, CONFIRMATIONS, CONFIRMATION_TIMEOUT_SECS.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Base mainnet public RPC.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

/// Blockchain-side config for [`crate::ContractLauncher`].
#[derive(Clone)]
pub struct LauncherConfig {
    pub rpc_url: String,
    pub private_key: String,
    pub contract_address: String,
    /// Blocks to wait for before a receipt counts as confirmed.
    pub confirmations: u64,
    /// Give up waiting for the receipt after this many seconds; None waits as long as the provider does.
    pub confirmation_timeout_secs: Option<u64>,
}

impl LauncherConfig {
    /// Loads from env. PRIVATE_KEY and CONTRACT_ADDRESS are required.
    pub fn from_env() -> Result<Self> {
        let private_key = required("PRIVATE_KEY")?;
        let contract_address = required("CONTRACT_ADDRESS")?;
        let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let confirmations = match env::var("CONFIRMATIONS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("CONFIRMATIONS is not a number: {}", s))?,
            Err(_) => 1,
        };
        let confirmation_timeout_secs = match env::var("CONFIRMATION_TIMEOUT_SECS") {
            Ok(s) => Some(
                s.parse()
                    .with_context(|| format!("CONFIRMATION_TIMEOUT_SECS is not a number: {}", s))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            rpc_url,
            private_key,
            contract_address,
            confirmations,
            confirmation_timeout_secs,
        })
    }

    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Ok(_) => anyhow::bail!("{} is empty", name),
        Err(_) => anyhow::bail!("{} not set", name),
    }
}

impl fmt::Debug for LauncherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauncherConfig")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"***")
            .field("contract_address", &self.contract_address)
            .field("confirmations", &self.confirmations)
            .field("confirmation_timeout_secs", &self.confirmation_timeout_secs)
            .finish()
    }
}
