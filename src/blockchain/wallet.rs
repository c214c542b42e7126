//! Local private-key wallet backed by a JSON-RPC endpoint.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::blockchain::contract::{AlloyMintContract, ContractBinding, MintContract};
use crate::blockchain::provider::{WalletAvailability, WalletProvider};
use crate::blockchain::types::{bounded_rpc, ChainError, ChainId, ChainResult, NetworkInfo};
use crate::config::WalletConfig;

/// Wallet holding a local signer and a provider that signs with it.
#[derive(Clone)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
    provider: DynProvider,
    rpc_timeout: Duration,
}

impl LocalWallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Security
    /// The private key is parsed and stored securely. It is never logged.
    pub fn from_private_key(private_key_hex: &str, config: &WalletConfig) -> ChainResult<Self> {
        let key_hex = private_key_hex
            .trim()
            .strip_prefix("0x")
            .unwrap_or(private_key_hex.trim());

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        let rpc_url: url::Url = config.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_http(rpc_url)
            .erased();

        tracing::info!(
            address = %signer.address(),
            rpc_url = %config.rpc_url,
            "Wallet initialized"
        );

        Ok(Self {
            signer,
            provider,
            rpc_timeout: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Load wallet from the environment variable named in config.
    pub fn from_env(config: &WalletConfig) -> ChainResult<Self> {
        let private_key = std::env::var(&config.private_key_env).map_err(|_| {
            ChainError::Wallet(format!(
                "Environment variable {} not set",
                config.private_key_env
            ))
        })?;

        Self::from_private_key(&private_key, config)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

/// Set up the process wallet, or explain why there is none.
pub fn detect_wallet(config: &WalletConfig) -> WalletAvailability {
    if !config.enabled {
        return WalletAvailability::unavailable("wallet provider disabled in configuration");
    }

    match LocalWallet::from_env(config) {
        Ok(wallet) => WalletAvailability::Available(Arc::new(wallet)),
        Err(e) => {
            tracing::warn!(error = %e, "No wallet provider available");
            WalletAvailability::unavailable(e.to_string())
        }
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn request_accounts(&self) -> ChainResult<Vec<Address>> {
        // A local key authorizes exactly its own account.
        Ok(vec![self.signer.address()])
    }

    async fn signer_address(&self) -> ChainResult<Address> {
        Ok(self.signer.address())
    }

    async fn network(&self) -> ChainResult<NetworkInfo> {
        let chain_id = bounded_rpc(self.rpc_timeout, self.provider.get_chain_id()).await?;
        Ok(NetworkInfo::from(ChainId(chain_id)))
    }

    fn bind_contract(&self, binding: ContractBinding, signer: Address) -> Arc<dyn MintContract> {
        Arc::new(AlloyMintContract::new(
            binding,
            self.provider.clone(),
            signer,
            self.rpc_timeout,
        ))
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.signer.address())
            .field("rpc_timeout", &self.rpc_timeout)
            .finish()
    }
}
