//! NFT contract handle: gas estimation, submission and confirmation of `safeMint`.
//!
//! # Responsibilities
//! - Encode `safeMint(address,string)` calldata
//! - Estimate gas and send with an explicit gas limit
//! - Poll for the receipt until mined or the confirmation deadline passes

use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::abi::ContractInterface;
use crate::blockchain::types::{bounded_rpc, ChainError, ChainResult, Confirmation};
use crate::config::ContractConfig;

sol! {
    /// Mint entry point of the art contract.
    interface INftArtCreator {
        function safeMint(address to, string uri) external;
    }
}

/// Everything needed to bind a contract handle to a signer.
#[derive(Debug, Clone)]
pub struct ContractBinding {
    pub address: Address,
    pub interface: ContractInterface,
    pub confirmation_timeout: Duration,
    pub poll_interval: Duration,
}

impl ContractBinding {
    /// Build from config, loading the ABI file.
    pub fn from_config(config: &ContractConfig) -> ChainResult<Self> {
        let address = config
            .address
            .parse::<Address>()
            .map_err(|e| ChainError::InvalidAddress {
                address: config.address.clone(),
                reason: e.to_string(),
            })?;
        let interface = ContractInterface::load(std::path::Path::new(&config.abi_path))?;
        if !interface.has_safe_mint() {
            tracing::warn!(
                abi_path = %config.abi_path,
                functions = ?interface.function_signatures(),
                "Contract ABI does not declare safeMint(address,string); minting will fail"
            );
        }

        Ok(Self {
            address,
            interface,
            confirmation_timeout: Duration::from_secs(config.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }
}

/// Operations the mint pipeline needs from a contract handle.
#[async_trait]
pub trait MintContract: Send + Sync + fmt::Debug {
    /// Deployed address.
    fn address(&self) -> Address;

    /// Interface description the handle was bound with.
    fn interface(&self) -> &ContractInterface;

    /// Gas needed for `safeMint(to, uri)`.
    async fn estimate_safe_mint(&self, to: Address, uri: &str) -> ChainResult<u64>;

    /// Sign and broadcast `safeMint(to, uri)` with the given gas limit.
    async fn submit_safe_mint(&self, to: Address, uri: &str, gas_limit: u64) -> ChainResult<TxHash>;

    /// Wait until the transaction is mined successfully.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<Confirmation>;
}

/// `MintContract` over an alloy provider with a wallet filler.
#[derive(Clone)]
pub struct AlloyMintContract {
    binding: ContractBinding,
    provider: DynProvider,
    from: Address,
    rpc_timeout: Duration,
}

impl AlloyMintContract {
    pub fn new(
        binding: ContractBinding,
        provider: DynProvider,
        from: Address,
        rpc_timeout: Duration,
    ) -> Self {
        Self {
            binding,
            provider,
            from,
            rpc_timeout,
        }
    }

    fn safe_mint_request(&self, to: Address, uri: &str) -> TransactionRequest {
        let calldata = safe_mint_calldata(to, uri);
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.binding.address)
            .with_input(calldata)
    }
}

/// ABI-encoded `safeMint(to, uri)` call.
pub fn safe_mint_calldata(to: Address, uri: &str) -> Vec<u8> {
    INftArtCreator::safeMintCall {
        to,
        uri: uri.to_string(),
    }
    .abi_encode()
}

#[async_trait]
impl MintContract for AlloyMintContract {
    fn address(&self) -> Address {
        self.binding.address
    }

    fn interface(&self) -> &ContractInterface {
        &self.binding.interface
    }

    async fn estimate_safe_mint(&self, to: Address, uri: &str) -> ChainResult<u64> {
        let tx = self.safe_mint_request(to, uri);
        let gas = bounded_rpc(self.rpc_timeout, self.provider.estimate_gas(tx)).await?;
        tracing::debug!(contract = %self.binding.address, gas, "Estimated safeMint gas");
        Ok(gas)
    }

    async fn submit_safe_mint(&self, to: Address, uri: &str, gas_limit: u64) -> ChainResult<TxHash> {
        let tx = self.safe_mint_request(to, uri).with_gas_limit(gas_limit);
        let pending = bounded_rpc(self.rpc_timeout, self.provider.send_transaction(tx)).await?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, gas_limit, "safeMint transaction sent");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<Confirmation> {
        let deadline = self.binding.confirmation_timeout;

        let result = timeout(deadline, async {
            let mut ticker = interval(self.binding.poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match bounded_rpc(
                    self.rpc_timeout,
                    self.provider.get_transaction_receipt(tx_hash),
                )
                .await?
                {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Err(ChainError::Reverted(tx_hash));
                }

                return Ok(Confirmation {
                    tx_hash,
                    gas_used: receipt.gas_used(),
                    block_number: receipt.block_number(),
                });
            }
        })
        .await;

        match result {
            Ok(confirmation) => confirmation,
            Err(_) => Err(ChainError::ConfirmationTimeout {
                tx_hash,
                secs: deadline.as_secs(),
            }),
        }
    }
}

impl fmt::Debug for AlloyMintContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlloyMintContract")
            .field("address", &self.binding.address)
            .field("from", &self.from)
            .field("rpc_timeout", &self.rpc_timeout)
            .finish()
    }
}
