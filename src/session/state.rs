//! Studio state and its transitions.
//!
//! # State Transitions
//! ```text
//! begin_connect()          → Idle → Connecting (no connect or mint in flight)
//! connected(session)       → Connecting → Idle, session installed, error cleared
//! connection_failed(err)   → Connecting → Idle, session dropped, error recorded
//! begin_mint()             → Idle → Minting (requires session)
//! mint_succeeded(receipt)  → Minting → Idle, error cleared, receipt kept
//! mint_failed(err)         → Minting → Idle, error recorded
//! ```
//!
//! Only one of connect or mint runs at a time, so the session a mint was
//! started with is never replaced before it finishes. Every failed action
//! replaces the previously recorded error.

use alloy::primitives::Address;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::blockchain::{MintContract, MintReceipt, NetworkInfo};
use crate::error::StudioError;

/// A connected wallet: account, network and a contract handle signed by it.
#[derive(Clone)]
pub struct Session {
    pub account: Address,
    pub network: NetworkInfo,
    pub contract: Arc<dyn MintContract>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account", &self.account)
            .field("network", &self.network)
            .field("contract", &self.contract.address())
            .finish()
    }
}

/// What the studio is busy with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioPhase {
    #[default]
    Idle,
    /// A wallet connect or reconnect is awaiting the provider.
    Connecting,
    Minting { request_id: Uuid },
}

/// Permission to run one mint, handed out by [`StudioState::begin_mint`].
#[derive(Debug, Clone)]
pub struct MintTicket {
    pub request_id: Uuid,
    pub account: Address,
    pub contract: Arc<dyn MintContract>,
}

#[derive(Debug, Default)]
pub struct StudioState {
    session: Option<Session>,
    phase: StudioPhase,
    last_error: Option<StudioError>,
    last_mint: Option<MintReceipt>,
}

impl StudioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> StudioPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&StudioError> {
        self.last_error.as_ref()
    }

    pub fn last_mint(&self) -> Option<&MintReceipt> {
        self.last_mint.as_ref()
    }

    pub fn is_minting(&self) -> bool {
        matches!(self.phase, StudioPhase::Minting { .. })
    }

    pub fn is_connecting(&self) -> bool {
        self.phase == StudioPhase::Connecting
    }

    /// Whether the mint trigger should be enabled.
    pub fn can_mint(&self) -> bool {
        self.session.is_some() && self.phase == StudioPhase::Idle
    }

    fn fail(&mut self, error: StudioError) -> StudioError {
        self.last_error = Some(error.clone());
        error
    }

    /// Reject the action if a connect or mint is already running.
    fn ensure_idle(&mut self) -> Result<(), StudioError> {
        match self.phase {
            StudioPhase::Idle => Ok(()),
            StudioPhase::Connecting => Err(self.fail(StudioError::ConnectInFlight)),
            StudioPhase::Minting { .. } => Err(self.fail(StudioError::MintInFlight)),
        }
    }

    /// Enter `Connecting`, or record why a connect cannot start.
    pub fn begin_connect(&mut self) -> Result<(), StudioError> {
        self.ensure_idle()?;
        self.phase = StudioPhase::Connecting;
        Ok(())
    }

    fn finish_connect(&mut self) {
        if self.phase == StudioPhase::Connecting {
            self.phase = StudioPhase::Idle;
        }
    }

    pub fn connected(&mut self, session: Session) {
        self.finish_connect();
        self.session = Some(session);
        self.last_error = None;
    }

    pub fn connection_failed(&mut self, error: StudioError) {
        self.finish_connect();
        self.session = None;
        self.fail(error);
    }

    /// Enter `Minting`, or record why a mint cannot start.
    pub fn begin_mint(&mut self) -> Result<MintTicket, StudioError> {
        self.ensure_idle()?;
        let Some(session) = self.session.as_ref() else {
            return Err(self.fail(StudioError::NotConnected));
        };

        let ticket = MintTicket {
            request_id: Uuid::new_v4(),
            account: session.account,
            contract: session.contract.clone(),
        };
        self.phase = StudioPhase::Minting {
            request_id: ticket.request_id,
        };
        Ok(ticket)
    }

    fn finish_mint(&mut self, request_id: Uuid) -> bool {
        match self.phase {
            StudioPhase::Minting { request_id: current } if current == request_id => {
                self.phase = StudioPhase::Idle;
                true
            }
            _ => {
                tracing::warn!(request_id = %request_id, "Ignoring result of a mint that is not in flight");
                false
            }
        }
    }

    pub fn mint_succeeded(&mut self, receipt: MintReceipt) {
        if self.finish_mint(receipt.request_id) {
            self.last_error = None;
            self.last_mint = Some(receipt);
        }
    }

    pub fn mint_failed(&mut self, request_id: Uuid, error: StudioError) {
        if self.finish_mint(request_id) {
            self.fail(error);
        }
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> SessionView {
        SessionView {
            connected: self.session.is_some(),
            connecting: self.is_connecting(),
            account: self.session.as_ref().map(|s| s.account),
            network: self.session.as_ref().map(|s| s.network.clone()),
            contract: self.session.as_ref().map(|s| s.contract.address()),
            minting: self.is_minting(),
            mint_enabled: self.can_mint(),
            message: self.last_error.as_ref().map(|e| e.to_string()),
            error: self.last_error.clone(),
            last_mint: self.last_mint.clone(),
        }
    }
}

/// Serializable snapshot of the studio state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub connected: bool,
    pub connecting: bool,
    pub account: Option<Address>,
    pub network: Option<NetworkInfo>,
    pub contract: Option<Address>,
    pub minting: bool,
    pub mint_enabled: bool,
    pub error: Option<StudioError>,
    /// Human-readable form of `error`.
    pub message: Option<String>,
    pub last_mint: Option<MintReceipt>,
}
