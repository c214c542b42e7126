//! Sketch-to-NFT studio library.
//!
//! Draw on a raster canvas, then mint the drawing as a PNG data URI through
//! `safeMint(address,string)` on an Ethereum contract.

pub mod blockchain;
pub mod canvas;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod mint;
pub mod observability;
pub mod session;
pub mod studio;

pub use config::StudioConfig;
pub use error::{MintStage, StudioError};
pub use http::StudioServer;
pub use lifecycle::Shutdown;
pub use studio::Studio;
