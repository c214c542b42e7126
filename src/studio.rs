//! The studio: drawing surface, pen and wallet session owned together.
//!
//! All mutation goes through the methods here. Locks are never held across a
//! wallet or RPC await, so drawing stays responsive while a connect or mint is
//! pending.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::blockchain::{ChainError, ContractBinding, MintReceipt, WalletAvailability};
use crate::canvas::{
    encode_png, Color, ColorParseError, DrawingSurface, EncodeError, Pen, PointerEvent,
};
use crate::config::{CanvasConfig, StudioConfig};
use crate::error::{MintStage, StudioError};
use crate::mint::{execute_mint, MintRequest};
use crate::observability::metrics;
use crate::session::{SessionManager, SessionView, StudioState};

/// Startup failures that prevent the studio from being built.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid canvas color: {0}")]
    Color(#[from] ColorParseError),

    #[error("invalid contract settings: {0}")]
    Contract(#[from] ChainError),
}

#[derive(Debug)]
struct Canvas {
    surface: DrawingSurface,
    pen: Pen,
}

/// Snapshot of the pen for clients.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PenView {
    pub color: Color,
    pub line_width: u32,
    pub drawing: bool,
    pub width: u32,
    pub height: u32,
}

pub struct Studio {
    canvas: Mutex<Canvas>,
    state: Mutex<StudioState>,
    wallet: WalletAvailability,
    sessions: SessionManager,
}

impl Studio {
    pub fn new(
        canvas: &CanvasConfig,
        wallet: WalletAvailability,
        sessions: SessionManager,
    ) -> Result<Self, SetupError> {
        let color: Color = canvas.default_color.parse()?;
        Ok(Self {
            canvas: Mutex::new(Canvas {
                surface: DrawingSurface::new(canvas.width, canvas.height),
                pen: Pen::new(color, canvas.line_width),
            }),
            state: Mutex::new(StudioState::new()),
            wallet,
            sessions,
        })
    }

    /// Build from a validated config, loading the contract ABI.
    pub fn from_config(config: &StudioConfig, wallet: WalletAvailability) -> Result<Self, SetupError> {
        let binding = ContractBinding::from_config(&config.contract)?;
        let sessions = SessionManager::new(binding, config.wallet.expected_chain_id);
        Self::new(&config.canvas, wallet, sessions)
    }

    /// Connect (or reconnect) the wallet session.
    ///
    /// Runs on its own task so a caller going away cannot strand the studio
    /// in the connecting phase.
    pub async fn connect(self: &Arc<Self>) -> Result<SessionView, StudioError> {
        let studio = Arc::clone(self);
        match tokio::spawn(async move { studio.run_connect().await }).await {
            Ok(outcome) => outcome,
            Err(e) => Err(StudioError::connection(format!("connect task aborted: {}", e))),
        }
    }

    async fn run_connect(&self) -> Result<SessionView, StudioError> {
        self.state.lock().await.begin_connect()?;

        let outcome = self.sessions.connect(&self.wallet).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(session) => {
                state.connected(session);
                Ok(state.view())
            }
            Err(e) => {
                state.connection_failed(e.clone());
                Err(e)
            }
        }
    }

    pub async fn view(&self) -> SessionView {
        self.state.lock().await.view()
    }

    /// Feed one pointer event to the pen. Returns true if pixels changed.
    pub async fn pointer(&self, event: PointerEvent) -> bool {
        let kind = match event {
            PointerEvent::Down { .. } => "down",
            PointerEvent::Move { .. } => "move",
            PointerEvent::Up => "up",
            PointerEvent::Leave => "leave",
        };
        metrics::record_pointer_event(kind);

        let mut canvas = self.canvas.lock().await;
        let Canvas { surface, pen } = &mut *canvas;
        pen.handle(event, surface)
    }

    pub async fn set_color(&self, color: Color) {
        self.canvas.lock().await.pen.set_color(color);
        tracing::debug!(color = %color, "Stroke color selected");
    }

    /// Wipe the surface and end any stroke in progress.
    pub async fn clear(&self) {
        let mut canvas = self.canvas.lock().await;
        canvas.surface.clear();
        canvas.pen.reset();
        tracing::info!("Canvas cleared");
    }

    pub async fn pen(&self) -> PenView {
        let canvas = self.canvas.lock().await;
        PenView {
            color: canvas.pen.color(),
            line_width: canvas.pen.line_width(),
            drawing: canvas.pen.is_drawing(),
            width: canvas.surface.width(),
            height: canvas.surface.height(),
        }
    }

    /// Copy of the current raster.
    pub async fn surface(&self) -> DrawingSurface {
        self.canvas.lock().await.surface.clone()
    }

    pub async fn export_png(&self) -> Result<Vec<u8>, EncodeError> {
        let canvas = self.canvas.lock().await;
        encode_png(&canvas.surface)
    }

    /// Mint the current drawing to the connected account.
    ///
    /// Runs on its own task so a caller going away cannot strand the studio
    /// in the minting phase.
    pub async fn mint(self: &Arc<Self>) -> Result<MintReceipt, StudioError> {
        let studio = Arc::clone(self);
        match tokio::spawn(async move { studio.run_mint().await }).await {
            Ok(outcome) => outcome,
            Err(e) => Err(StudioError::transaction(
                MintStage::Confirm,
                format!("mint task aborted: {}", e),
            )),
        }
    }

    async fn run_mint(&self) -> Result<MintReceipt, StudioError> {
        let ticket = self.state.lock().await.begin_mint()?;

        let request = {
            let canvas = self.canvas.lock().await;
            MintRequest::from_surface(ticket.request_id, ticket.account, &canvas.surface)
        };

        let outcome = match request {
            Ok(request) => execute_mint(ticket.contract.as_ref(), &request).await,
            Err(e) => Err(e),
        };

        let mut state = self.state.lock().await;
        match &outcome {
            Ok(receipt) => state.mint_succeeded(receipt.clone()),
            Err(e) => state.mint_failed(ticket.request_id, e.clone()),
        }
        outcome
    }
}
