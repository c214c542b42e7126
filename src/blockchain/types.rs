//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::IntoFuture;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use uuid::Uuid;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl ChainId {
    /// Conventional network name, "unknown" for unregistered chains.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "mainnet",
            10 => "optimism",
            56 => "bnb",
            137 => "matic",
            8453 => "base",
            17000 => "holesky",
            42161 => "arbitrum",
            80002 => "matic-amoy",
            84532 => "base-sepolia",
            11155111 => "sepolia",
            _ => "unknown",
        }
    }
}

/// Network the wallet is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub name: String,
    pub chain_id: u64,
}

impl From<ChainId> for NetworkInfo {
    fn from(id: ChainId) -> Self {
        Self {
            name: id.name().to_string(),
            chain_id: id.0,
        }
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was not confirmed within expected time.
    #[error("Transaction {tx_hash} not confirmed after {secs} seconds")]
    ConfirmationTimeout { tx_hash: TxHash, secs: u64 },

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// The wallet refused or could not authorize.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Configured contract address is not an Ethereum address.
    #[error("Invalid contract address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Contract interface could not be read.
    #[error("ABI error: {0}")]
    Abi(String),
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Run one RPC call under a deadline, flattening transport errors to [`ChainError::Rpc`].
pub(crate) async fn bounded_rpc<F, T, E>(limit: Duration, call: F) -> ChainResult<T>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: fmt::Display,
{
    match timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
        Err(_) => Err(ChainError::Timeout(limit.as_secs())),
    }
}

/// Outcome of a confirmed mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Studio-side id of the mint request.
    pub request_id: Uuid,
    pub tx_hash: TxHash,
    /// Account the token was minted to.
    pub recipient: Address,
    /// Gas limit the transaction was sent with.
    pub gas_limit: u64,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}

/// Receipt fields reported by the chain once a transaction is mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}
