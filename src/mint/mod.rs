//! Canvas-to-mint pipeline.
//!
//! # Data Flow
//! ```text
//! begin_mint() ticket + surface snapshot
//!     → types.rs (MintRequest with the PNG data URI)
//!     → pipeline.rs (safeMint present? → estimate → submit → confirm)
//!     → MintReceipt or StudioError::{ContractMethodMissing, TransactionFailed}
//! ```

pub mod pipeline;
pub mod types;

pub use pipeline::execute_mint;
pub use types::MintRequest;
