//! Contract interface descriptions (JSON ABI).

use alloy::json_abi::JsonAbi;
use std::fs;
use std::path::Path;

use crate::blockchain::types::{ChainError, ChainResult};

/// Signature of the mint entry point every art contract must expose.
pub const SAFE_MINT_SIGNATURE: &str = "safeMint(address,string)";

/// Parsed ABI of the target contract.
#[derive(Debug, Clone)]
pub struct ContractInterface {
    abi: JsonAbi,
}

impl ContractInterface {
    /// Parse a bare ABI array or a build artifact carrying an `abi` field.
    pub fn from_json(json: &str) -> ChainResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ChainError::Abi(e.to_string()))?;

        let abi_value = match value {
            serde_json::Value::Object(mut artifact) => artifact
                .remove("abi")
                .ok_or_else(|| ChainError::Abi("artifact has no `abi` field".to_string()))?,
            other => other,
        };

        let abi: JsonAbi =
            serde_json::from_value(abi_value).map_err(|e| ChainError::Abi(e.to_string()))?;
        Ok(Self { abi })
    }

    /// Read and parse an ABI file.
    pub fn load(path: &Path) -> ChainResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ChainError::Abi(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Whether a function with this exact signature, e.g. `safeMint(address,string)`, exists.
    pub fn has_function(&self, signature: &str) -> bool {
        self.abi.functions().any(|f| f.signature() == signature)
    }

    pub fn has_safe_mint(&self) -> bool {
        self.has_function(SAFE_MINT_SIGNATURE)
    }

    /// All function signatures, sorted.
    pub fn function_signatures(&self) -> Vec<String> {
        let mut signatures: Vec<String> = self.abi.functions().map(|f| f.signature()).collect();
        signatures.sort();
        signatures
    }
}
