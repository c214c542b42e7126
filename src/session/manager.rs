//! Wallet session manager: turns a wallet provider into a [`Session`].
//!
//! # Responsibilities
//! - Request account authorization
//! - Resolve signer and network, enforcing the pinned chain if configured
//! - Bind the contract handle to the signer
//!
//! A session is only returned once every step succeeded, so callers never see
//! an account without a contract or the other way round.

use crate::blockchain::{ChainError, ContractBinding, WalletAvailability};
use crate::error::StudioError;
use crate::observability::metrics;
use crate::session::state::Session;

pub struct SessionManager {
    binding: ContractBinding,
    expected_chain_id: Option<u64>,
}

impl SessionManager {
    pub fn new(binding: ContractBinding, expected_chain_id: Option<u64>) -> Self {
        Self {
            binding,
            expected_chain_id,
        }
    }

    /// Run the connect sequence against the wallet provider.
    pub async fn connect(&self, wallet: &WalletAvailability) -> Result<Session, StudioError> {
        let result = self.establish(wallet).await;
        match &result {
            Ok(session) => {
                metrics::record_connect("connected");
                tracing::info!(
                    account = %session.account,
                    network = %session.network.name,
                    chain_id = session.network.chain_id,
                    contract = %session.contract.address(),
                    "Wallet session established"
                );
            }
            Err(e) => {
                metrics::record_connect(e.kind());
                tracing::error!(error = %e, "Failed to connect to Ethereum");
            }
        }
        result
    }

    async fn establish(&self, wallet: &WalletAvailability) -> Result<Session, StudioError> {
        let provider = match wallet {
            WalletAvailability::Available(provider) => provider,
            WalletAvailability::Unavailable { reason } => {
                return Err(StudioError::ProviderUnavailable {
                    reason: reason.clone(),
                })
            }
        };

        let accounts = provider
            .request_accounts()
            .await
            .map_err(StudioError::connection)?;
        if accounts.is_empty() {
            return Err(StudioError::connection("wallet did not authorize any account"));
        }

        let signer = provider
            .signer_address()
            .await
            .map_err(StudioError::connection)?;
        let network = provider.network().await.map_err(StudioError::connection)?;

        if let Some(expected) = self.expected_chain_id {
            if network.chain_id != expected {
                return Err(StudioError::connection(ChainError::ChainMismatch {
                    expected,
                    actual: network.chain_id,
                }));
            }
        }

        let contract = provider.bind_contract(self.binding.clone(), signer);

        Ok(Session {
            account: signer,
            network,
            contract,
        })
    }
}
