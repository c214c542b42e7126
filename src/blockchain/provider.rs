//! Wallet provider seam.
//!
//! The studio never talks to a signer directly; it goes through a
//! [`WalletProvider`], which brokers account authorization, network identity
//! and contract handles. Production uses [`LocalWallet`](super::wallet::LocalWallet);
//! tests plug in scripted providers.

use alloy::primitives::Address;
use async_trait::async_trait;
use std::sync::Arc;

use crate::blockchain::contract::{ContractBinding, MintContract};
use crate::blockchain::types::{ChainResult, NetworkInfo};

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet to authorize its accounts. An empty list means refusal.
    async fn request_accounts(&self) -> ChainResult<Vec<Address>>;

    /// Address of the identity that will sign transactions.
    async fn signer_address(&self) -> ChainResult<Address>;

    /// Network the provider is currently connected to.
    async fn network(&self) -> ChainResult<NetworkInfo>;

    /// Contract handle whose transactions are signed by `signer`.
    fn bind_contract(&self, binding: ContractBinding, signer: Address) -> Arc<dyn MintContract>;
}

/// Whether a wallet provider exists for this process.
#[derive(Clone)]
pub enum WalletAvailability {
    Available(Arc<dyn WalletProvider>),
    /// No provider could be set up; `reason` is shown to the user.
    Unavailable { reason: String },
}

impl WalletAvailability {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        WalletAvailability::Unavailable {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Debug for WalletAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletAvailability::Available(_) => f.write_str("Available"),
            WalletAvailability::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}
