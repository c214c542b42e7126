//! Wallet session subsystem.
//!
//! # Data Flow
//! ```text
//! startup / reconnect action
//!     → manager.rs (accounts → signer → network → contract handle)
//!     → state.rs (begin_connect, then connected / connection_failed)
//!     → read by the mint pipeline through begin_mint()
//! ```

pub mod manager;
pub mod state;

pub use manager::SessionManager;
pub use state::{MintTicket, Session, SessionView, StudioPhase, StudioState};
