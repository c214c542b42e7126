//! The mint sequence: interface check → estimate → submit → confirm.

use std::time::Instant;

use crate::blockchain::{MintContract, MintReceipt, SAFE_MINT_SIGNATURE};
use crate::error::{MintStage, StudioError};
use crate::mint::types::MintRequest;
use crate::observability::metrics;

/// Mint `request` through `contract`, one awaited step at a time.
///
/// Nothing local is mutated here, so a failure at any step needs no rollback.
pub async fn execute_mint(
    contract: &dyn MintContract,
    request: &MintRequest,
) -> Result<MintReceipt, StudioError> {
    let start = Instant::now();
    let result = run_steps(contract, request).await;

    match &result {
        Ok(receipt) => {
            metrics::record_mint("minted", start);
            tracing::info!(
                request_id = %request.id,
                tx_hash = %receipt.tx_hash,
                block_number = ?receipt.block_number,
                gas_used = receipt.gas_used,
                "NFT minted successfully"
            );
        }
        Err(e) => {
            metrics::record_mint(e.kind(), start);
            tracing::error!(request_id = %request.id, error = %e, "Error minting NFT");
        }
    }
    result
}

async fn run_steps(
    contract: &dyn MintContract,
    request: &MintRequest,
) -> Result<MintReceipt, StudioError> {
    if !contract.interface().has_safe_mint() {
        return Err(StudioError::ContractMethodMissing {
            signature: SAFE_MINT_SIGNATURE.to_string(),
        });
    }

    let uri = request.payload.as_str();
    tracing::debug!(
        request_id = %request.id,
        contract = %contract.address(),
        recipient = %request.recipient,
        payload_bytes = uri.len(),
        "Starting mint"
    );

    let gas_limit = contract
        .estimate_safe_mint(request.recipient, uri)
        .await
        .map_err(|e| StudioError::transaction(MintStage::Estimate, e))?;
    tracing::info!(request_id = %request.id, gas_limit, "Estimated gas");

    let tx_hash = contract
        .submit_safe_mint(request.recipient, uri, gas_limit)
        .await
        .map_err(|e| StudioError::transaction(MintStage::Submit, e))?;
    tracing::info!(request_id = %request.id, tx_hash = %tx_hash, "Transaction sent");

    let confirmation = contract
        .wait_for_receipt(tx_hash)
        .await
        .map_err(|e| StudioError::transaction(MintStage::Confirm, e))?;

    Ok(MintReceipt {
        request_id: request.id,
        tx_hash: confirmation.tx_hash,
        recipient: request.recipient,
        gas_limit,
        gas_used: confirmation.gas_used,
        block_number: confirmation.block_number,
    })
}
