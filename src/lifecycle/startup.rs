//! Startup orchestration.
//!
//! Config → wallet detection → studio → initial connect. A failed connect is
//! not fatal: the studio starts draw-only and the user can reconnect later.

use std::sync::Arc;

use crate::blockchain::detect_wallet;
use crate::config::StudioConfig;
use crate::studio::{SetupError, Studio};

/// Build the studio and attempt the first wallet connection.
pub async fn bootstrap(config: &StudioConfig) -> Result<Arc<Studio>, SetupError> {
    let wallet = detect_wallet(&config.wallet);
    let studio = Arc::new(Studio::from_config(config, wallet)?);

    if let Err(e) = studio.connect().await {
        tracing::warn!(error = %e, "Starting without a wallet session");
    }

    Ok(studio)
}
