//! Studio HTTP API.
//!
//! # Data Flow
//! ```text
//! client (sketch-cli, browser)
//!     → server.rs (router, trace + timeout layers)
//!     → handlers.rs (JSON in/out, StudioError → status code)
//!     → Studio (canvas, session, mint)
//! ```

pub mod handlers;
pub mod server;

pub use handlers::ApiError;
pub use server::{build_router, AppState, StudioServer};
