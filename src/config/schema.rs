//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the studio.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the drawing studio.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StudioConfig {
    /// Listener configuration for the studio API.
    pub listener: ListenerConfig,

    /// Drawing surface settings.
    pub canvas: CanvasConfig,

    /// Wallet provider settings.
    pub wallet: WalletConfig,

    /// Target NFT contract.
    pub contract: ContractConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Drawing surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Surface width in pixels.
    pub width: u32,

    /// Surface height in pixels.
    pub height: u32,

    /// Initially selected stroke color ("#rrggbb").
    pub default_color: String,

    /// Brush size in pixels.
    pub line_width: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            default_color: "#000000".to_string(),
            line_width: 1,
        }
    }
}

/// Wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Enable the wallet provider. When disabled the studio runs draw-only.
    pub enabled: bool,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Name of the environment variable holding the signer's private key.
    pub private_key_env: String,

    /// Chain the wallet must be on, if pinned.
    pub expected_chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rpc_url: "http://localhost:8545".to_string(),
            private_key_env: "SKETCH_WALLET_PRIVATE_KEY".to_string(),
            expected_chain_id: None,
            rpc_timeout_secs: 10,
        }
    }
}

/// NFT contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Deployed contract address.
    pub address: String,

    /// Path to the contract ABI (bare array or build artifact).
    pub abi_path: String,

    /// Maximum time to wait for a mint receipt in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt polling interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: "0x05D0AcA3ba12f010f6A26104da5cB83419723842".to_string(),
            abi_path: "abi/NFTArtCreator.json".to_string(),
            confirmation_timeout_secs: 300,
            poll_interval_ms: 2000,
        }
    }
}

/// Timeout configuration for the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout for API calls in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 600 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
