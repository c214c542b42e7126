//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key) + [wallet] config
//!     → wallet.rs (key loading, signing provider)
//!     → provider.rs (WalletProvider seam: accounts, network, contract binding)
//!     → abi.rs (contract interface from the ABI file)
//!     → contract.rs (estimate, send, confirm safeMint)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod abi;
pub mod contract;
pub mod provider;
pub mod types;
pub mod wallet;

pub use abi::{ContractInterface, SAFE_MINT_SIGNATURE};
pub use contract::{AlloyMintContract, ContractBinding, MintContract};
pub use provider::{WalletAvailability, WalletProvider};
pub use types::{ChainError, ChainId, ChainResult, Confirmation, MintReceipt, NetworkInfo};
pub use wallet::{detect_wallet, LocalWallet};
