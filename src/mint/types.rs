//! Mint request types.

use alloy::primitives::Address;
use uuid::Uuid;

use crate::canvas::{DrawingSurface, ImagePayload};
use crate::error::{MintStage, StudioError};

/// One mint action: who receives the token and the drawing it carries.
#[derive(Debug, Clone)]
pub struct MintRequest {
    pub id: Uuid,
    pub recipient: Address,
    pub payload: ImagePayload,
}

impl MintRequest {
    /// Serialize the surface into a request for `recipient`.
    pub fn from_surface(
        id: Uuid,
        recipient: Address,
        surface: &DrawingSurface,
    ) -> Result<Self, StudioError> {
        let payload = ImagePayload::from_surface(surface)
            .map_err(|e| StudioError::transaction(MintStage::Encode, e))?;
        Ok(Self {
            id,
            recipient,
            payload,
        })
    }
}
