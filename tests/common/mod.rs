//! Shared mocks for integration tests: a scripted wallet provider and a
//! contract handle that records every call it receives.

#![allow(dead_code)]

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use sketch_mint::blockchain::{
    ChainError, ChainResult, Confirmation, ContractBinding, ContractInterface, MintContract,
    NetworkInfo, WalletAvailability, WalletProvider,
};
use sketch_mint::config::CanvasConfig;
use sketch_mint::error::MintStage;
use sketch_mint::session::{SessionManager, SessionView};
use sketch_mint::Studio;

pub const CONTRACT_ADDRESS: &str = "0x05D0AcA3ba12f010f6A26104da5cB83419723842";

pub const NFT_ABI: &str = r#"[
    {
        "type": "function",
        "name": "safeMint",
        "stateMutability": "nonpayable",
        "inputs": [
            { "name": "to", "type": "address", "internalType": "address" },
            { "name": "uri", "type": "string", "internalType": "string" }
        ],
        "outputs": []
    },
    {
        "type": "function",
        "name": "tokenURI",
        "stateMutability": "view",
        "inputs": [{ "name": "tokenId", "type": "uint256", "internalType": "uint256" }],
        "outputs": [{ "name": "", "type": "string", "internalType": "string" }]
    }
]"#;

pub const ABI_WITHOUT_MINT: &str = r#"[
    {
        "type": "function",
        "name": "tokenURI",
        "stateMutability": "view",
        "inputs": [{ "name": "tokenId", "type": "uint256", "internalType": "uint256" }],
        "outputs": [{ "name": "", "type": "string", "internalType": "string" }]
    }
]"#;

pub const GAS_ESTIMATE: u64 = 184_512;

pub fn account() -> Address {
    Address::repeat_byte(0xaa)
}

pub fn tx_hash() -> TxHash {
    TxHash::repeat_byte(0x42)
}

pub fn interface(abi: &str) -> ContractInterface {
    ContractInterface::from_json(abi).unwrap()
}

pub fn binding(abi: &str) -> ContractBinding {
    ContractBinding {
        address: CONTRACT_ADDRESS.parse().unwrap(),
        interface: interface(abi),
        confirmation_timeout: Duration::from_secs(5),
        poll_interval: Duration::from_millis(10),
    }
}

/// One call observed by [`MockContract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Estimate { to: Address, uri: String },
    Submit { to: Address, uri: String, gas_limit: u64 },
    Wait { tx_hash: TxHash },
}

/// Contract handle that records calls and fails on demand.
#[derive(Debug)]
pub struct MockContract {
    address: Address,
    interface: ContractInterface,
    calls: Mutex<Vec<Call>>,
    fail_at: Option<MintStage>,
    gate: Option<Arc<Notify>>,
}

impl MockContract {
    pub fn new(abi: &str) -> Self {
        Self {
            address: CONTRACT_ADDRESS.parse().unwrap(),
            interface: interface(abi),
            calls: Mutex::new(Vec::new()),
            fail_at: None,
            gate: None,
        }
    }

    /// Fail the given step with an RPC error.
    pub fn failing_at(mut self, stage: MintStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    /// Hold `wait_for_receipt` until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, stage: MintStage) -> ChainResult<()> {
        if self.fail_at == Some(stage) {
            return Err(ChainError::Rpc(format!("{} rejected by node", stage)));
        }
        Ok(())
    }
}

#[async_trait]
impl MintContract for MockContract {
    fn address(&self) -> Address {
        self.address
    }

    fn interface(&self) -> &ContractInterface {
        &self.interface
    }

    async fn estimate_safe_mint(&self, to: Address, uri: &str) -> ChainResult<u64> {
        self.record(Call::Estimate {
            to,
            uri: uri.to_string(),
        });
        self.check(MintStage::Estimate)?;
        Ok(GAS_ESTIMATE)
    }

    async fn submit_safe_mint(&self, to: Address, uri: &str, gas_limit: u64) -> ChainResult<TxHash> {
        self.record(Call::Submit {
            to,
            uri: uri.to_string(),
            gas_limit,
        });
        self.check(MintStage::Submit)?;
        Ok(tx_hash())
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<Confirmation> {
        self.record(Call::Wait { tx_hash });
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.check(MintStage::Confirm)?;
        Ok(Confirmation {
            tx_hash,
            gas_used: GAS_ESTIMATE - 4_512,
            block_number: Some(19),
        })
    }
}

/// Wallet provider with a scripted authorization outcome.
pub struct MockWallet {
    contract: Arc<MockContract>,
    authorize: bool,
    chain_id: u64,
    network_gate: Option<Arc<Notify>>,
    pub account_requests: AtomicUsize,
}

impl MockWallet {
    pub fn new(contract: Arc<MockContract>) -> Self {
        Self {
            contract,
            authorize: true,
            chain_id: 11155111,
            network_gate: None,
            account_requests: AtomicUsize::new(0),
        }
    }

    /// Wallet whose user refuses the authorization prompt.
    pub fn rejecting(contract: Arc<MockContract>) -> Self {
        Self {
            authorize: false,
            ..Self::new(contract)
        }
    }

    pub fn on_chain(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Hold `network` until the gate is notified, once per connect.
    pub fn gated_network(mut self, gate: Arc<Notify>) -> Self {
        self.network_gate = Some(gate);
        self
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> ChainResult<Vec<Address>> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        if self.authorize {
            Ok(vec![account()])
        } else {
            Err(ChainError::Wallet("User rejected the request.".to_string()))
        }
    }

    async fn signer_address(&self) -> ChainResult<Address> {
        Ok(account())
    }

    async fn network(&self) -> ChainResult<NetworkInfo> {
        if let Some(gate) = &self.network_gate {
            gate.notified().await;
        }
        Ok(sketch_mint::blockchain::ChainId(self.chain_id).into())
    }

    fn bind_contract(&self, _binding: ContractBinding, _signer: Address) -> Arc<dyn MintContract> {
        self.contract.clone()
    }
}

/// A 600×600 studio backed by `wallet`.
pub fn studio(wallet: WalletAvailability) -> Arc<Studio> {
    studio_with_chain(wallet, None)
}

pub fn studio_with_chain(
    wallet: WalletAvailability,
    expected_chain_id: Option<u64>,
) -> Arc<Studio> {
    let sessions = SessionManager::new(binding(NFT_ABI), expected_chain_id);
    Arc::new(Studio::new(&CanvasConfig::default(), wallet, sessions).unwrap())
}

/// Poll `studio` until `ready` holds for its session view.
pub async fn wait_for(studio: &Studio, ready: impl Fn(&SessionView) -> bool) {
    for _ in 0..500 {
        if ready(&studio.view().await) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("studio never reached the expected state");
}

pub fn available(wallet: MockWallet) -> WalletAvailability {
    WalletAvailability::Available(Arc::new(wallet))
}
