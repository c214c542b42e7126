//! User-facing error taxonomy.
//!
//! Every studio action (connect, mint) resolves to either success or exactly
//! one [`StudioError`], which replaces whatever error was shown before. The
//! variants carry structured payloads so callers can match on them instead of
//! parsing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Step of the mint sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintStage {
    /// Serializing the drawing to the image payload.
    Encode,
    /// Gas estimation for `safeMint`.
    Estimate,
    /// Signing and broadcasting the transaction.
    Submit,
    /// Waiting for the on-chain receipt.
    Confirm,
}

impl fmt::Display for MintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            MintStage::Encode => "image encoding",
            MintStage::Estimate => "gas estimation",
            MintStage::Submit => "submission",
            MintStage::Confirm => "confirmation",
        };
        f.write_str(stage)
    }
}

/// Errors surfaced to the user by the studio.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StudioError {
    /// No wallet provider is configured.
    #[error("No wallet available: {reason}")]
    ProviderUnavailable { reason: String },

    /// Authorization or network lookup failed.
    #[error("Failed to connect to Ethereum: {reason}")]
    ConnectionFailed { reason: String },

    /// A mint was attempted before a session existed.
    #[error("Please connect a wallet first")]
    NotConnected,

    /// The contract interface does not declare the mint method.
    #[error("Contract interface has no `{signature}` function")]
    ContractMethodMissing { signature: String },

    /// Estimation, submission or confirmation failed.
    #[error("Error minting NFT during {stage}: {reason}")]
    TransactionFailed { stage: MintStage, reason: String },

    /// Another mint has not finished yet.
    #[error("A mint is already in progress")]
    MintInFlight,

    /// A wallet connect has not finished yet.
    #[error("A wallet connection is already in progress")]
    ConnectInFlight,
}

impl StudioError {
    /// Short machine-readable tag, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            StudioError::ProviderUnavailable { .. } => "provider_unavailable",
            StudioError::ConnectionFailed { .. } => "connection_failed",
            StudioError::NotConnected => "not_connected",
            StudioError::ContractMethodMissing { .. } => "contract_method_missing",
            StudioError::TransactionFailed { .. } => "transaction_failed",
            StudioError::MintInFlight => "mint_in_flight",
            StudioError::ConnectInFlight => "connect_in_flight",
        }
    }

    pub(crate) fn connection(reason: impl fmt::Display) -> Self {
        StudioError::ConnectionFailed {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn transaction(stage: MintStage, reason: impl fmt::Display) -> Self {
        StudioError::TransactionFailed {
            stage,
            reason: reason.to_string(),
        }
    }
}
