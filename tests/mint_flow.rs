//! End-to-end studio flows against scripted wallet and contract mocks.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use sketch_mint::blockchain::WalletAvailability;
use sketch_mint::canvas::{Color, ImagePayload, PointerEvent, PNG_DATA_URI_PREFIX};
use sketch_mint::error::{MintStage, StudioError};

mod common;
use common::{Call, MockContract, MockWallet};

const RED: Color = Color::rgb(255, 0, 0);

async fn draw_line(studio: &sketch_mint::Studio, from: (i32, i32), to: (i32, i32)) {
    studio
        .pointer(PointerEvent::Down { x: from.0, y: from.1 })
        .await;
    studio.pointer(PointerEvent::Move { x: to.0, y: to.1 }).await;
    studio.pointer(PointerEvent::Up).await;
}

#[tokio::test]
async fn test_red_line_is_minted_as_png_data_uri() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract.clone())));

    let view = studio.connect().await.unwrap();
    assert!(view.connected);
    assert!(view.mint_enabled);
    assert_eq!(view.network.unwrap().name, "sepolia");

    studio.set_color(RED).await;
    draw_line(&studio, (10, 10), (100, 100)).await;

    let surface = studio.surface().await;
    assert_eq!(surface.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(55, 55), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(100, 100), Some([255, 0, 0, 255]));
    assert_eq!(surface.painted_pixels(), 91);

    let receipt = studio.mint().await.unwrap();
    assert_eq!(receipt.recipient, common::account());
    assert_eq!(receipt.gas_limit, common::GAS_ESTIMATE);
    assert_eq!(receipt.tx_hash, common::tx_hash());
    assert_eq!(receipt.block_number, Some(19));

    let calls = contract.calls();
    assert_eq!(calls.len(), 3);

    let Call::Estimate { to, uri } = &calls[0] else {
        panic!("expected estimate first, got {:?}", calls[0]);
    };
    assert_eq!(*to, common::account());
    assert!(uri.starts_with(PNG_DATA_URI_PREFIX));

    let png = ImagePayload::parse(uri).unwrap().png_bytes().unwrap();
    let decoder = png::Decoder::new(png.as_slice());
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width, 600);
    assert_eq!(reader.info().height, 600);

    assert_eq!(
        calls[1],
        Call::Submit {
            to: common::account(),
            uri: uri.clone(),
            gas_limit: common::GAS_ESTIMATE,
        }
    );
    assert_eq!(
        calls[2],
        Call::Wait {
            tx_hash: common::tx_hash()
        }
    );

    let view = studio.view().await;
    assert!(view.error.is_none());
    assert!(!view.minting);
    assert_eq!(view.last_mint.unwrap().request_id, receipt.request_id);
}

#[tokio::test]
async fn test_color_change_does_not_recolor_existing_strokes() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract)));

    studio.set_color(RED).await;
    draw_line(&studio, (0, 0), (20, 0)).await;

    studio.set_color(Color::rgb(0, 0, 255)).await;
    draw_line(&studio, (0, 5), (20, 5)).await;

    let surface = studio.surface().await;
    assert_eq!(surface.pixel(10, 0), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(10, 5), Some([0, 0, 255, 255]));
}

#[tokio::test]
async fn test_stroke_keeps_color_captured_at_pointer_down() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract)));

    studio.set_color(RED).await;
    studio.pointer(PointerEvent::Down { x: 0, y: 0 }).await;
    studio.set_color(Color::rgb(0, 255, 0)).await;
    studio.pointer(PointerEvent::Move { x: 30, y: 0 }).await;
    studio.pointer(PointerEvent::Leave).await;

    let surface = studio.surface().await;
    assert_eq!(surface.pixel(30, 0), Some([255, 0, 0, 255]));
    assert!(!studio.pen().await.drawing);
}

#[tokio::test]
async fn test_mint_without_session_makes_no_contract_calls() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract.clone())));

    draw_line(&studio, (1, 1), (5, 5)).await;
    let err = studio.mint().await.unwrap_err();

    assert_eq!(err, StudioError::NotConnected);
    assert_eq!(err.to_string(), "Please connect a wallet first");
    assert!(contract.calls().is_empty());
    assert_eq!(studio.view().await.error, Some(StudioError::NotConnected));
}

#[tokio::test]
async fn test_rejected_authorization_leaves_no_session() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::rejecting(contract.clone())));

    let err = studio.connect().await.unwrap_err();
    assert!(matches!(err, StudioError::ConnectionFailed { .. }));
    assert!(err.to_string().starts_with("Failed to connect to Ethereum"));

    let view = studio.view().await;
    assert!(!view.connected);
    assert!(view.account.is_none());
    assert!(view.contract.is_none());
    assert!(!view.mint_enabled);
    assert!(view.message.is_some());

    assert_eq!(studio.mint().await.unwrap_err(), StudioError::NotConnected);
    assert!(contract.calls().is_empty());
}

#[tokio::test]
async fn test_missing_wallet_reports_provider_unavailable() {
    let studio = common::studio(WalletAvailability::unavailable(
        "SKETCH_WALLET_PRIVATE_KEY is not set",
    ));

    let err = studio.connect().await.unwrap_err();
    assert_eq!(
        err,
        StudioError::ProviderUnavailable {
            reason: "SKETCH_WALLET_PRIVATE_KEY is not set".to_string()
        }
    );
    assert!(!studio.view().await.connected);
}

#[tokio::test]
async fn test_wrong_chain_is_a_connection_failure() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let wallet = MockWallet::new(contract).on_chain(1);
    let studio = common::studio_with_chain(common::available(wallet), Some(11155111));

    let err = studio.connect().await.unwrap_err();
    let StudioError::ConnectionFailed { reason } = err else {
        panic!("expected connection failure, got {:?}", err);
    };
    assert!(reason.contains("expected 11155111, got 1"));
    assert!(!studio.view().await.connected);
}

#[tokio::test]
async fn test_missing_mint_method_skips_estimation() {
    let contract = Arc::new(MockContract::new(common::ABI_WITHOUT_MINT));
    let studio = common::studio(common::available(MockWallet::new(contract.clone())));
    studio.connect().await.unwrap();

    let err = studio.mint().await.unwrap_err();
    assert_eq!(
        err,
        StudioError::ContractMethodMissing {
            signature: "safeMint(address,string)".to_string()
        }
    );
    assert!(err.to_string().contains("safeMint(address,string)"));
    assert!(contract.calls().is_empty());

    let view = studio.view().await;
    assert!(!view.minting);
    assert!(view.mint_enabled);
}

#[tokio::test]
async fn test_failure_is_tagged_with_stage() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI).failing_at(MintStage::Submit));
    let studio = common::studio(common::available(MockWallet::new(contract.clone())));
    studio.connect().await.unwrap();

    let err = studio.mint().await.unwrap_err();
    let StudioError::TransactionFailed { stage, reason } = &err else {
        panic!("expected transaction failure, got {:?}", err);
    };
    assert_eq!(*stage, MintStage::Submit);
    assert!(reason.contains("rejected by node"));

    let calls = contract.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Estimate { .. }));
    assert!(matches!(calls[1], Call::Submit { .. }));

    let view = studio.view().await;
    assert_eq!(view.error, Some(err));
    assert!(view.last_mint.is_none());
    assert!(view.connected);
}

#[tokio::test]
async fn test_success_clears_previous_error() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract)));

    let _ = studio.mint().await;
    assert!(studio.view().await.error.is_some());

    studio.connect().await.unwrap();
    studio.mint().await.unwrap();
    assert!(studio.view().await.error.is_none());
}

#[tokio::test]
async fn test_overlapping_mint_and_reconnect_rejected() {
    let gate = Arc::new(Notify::new());
    let contract = Arc::new(MockContract::new(common::NFT_ABI).gated(gate.clone()));
    let wallet = Arc::new(MockWallet::new(contract.clone()));
    let studio = common::studio(WalletAvailability::Available(wallet.clone()));
    studio.connect().await.unwrap();

    let first = tokio::spawn({
        let studio = studio.clone();
        async move { studio.mint().await }
    });

    while contract.calls().len() < 3 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(studio.view().await.minting);

    assert_eq!(studio.mint().await.unwrap_err(), StudioError::MintInFlight);
    assert_eq!(studio.connect().await.unwrap_err(), StudioError::MintInFlight);
    assert_eq!(wallet.account_requests.load(Ordering::SeqCst), 1);

    gate.notify_one();
    let receipt = first.await.unwrap().unwrap();

    let view = studio.view().await;
    assert!(!view.minting);
    assert!(view.error.is_none());
    assert_eq!(view.last_mint.unwrap().request_id, receipt.request_id);
    assert_eq!(contract.calls().len(), 3);
}

#[tokio::test]
async fn test_reconnect_replaces_session() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let wallet = Arc::new(MockWallet::new(contract));
    let studio = common::studio(WalletAvailability::Available(wallet.clone()));

    studio.connect().await.unwrap();
    let view = studio.connect().await.unwrap();

    assert!(view.connected);
    assert_eq!(wallet.account_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_clear_resets_drawing() {
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let studio = common::studio(common::available(MockWallet::new(contract)));

    studio.pointer(PointerEvent::Down { x: 3, y: 3 }).await;
    studio.pointer(PointerEvent::Move { x: 40, y: 3 }).await;
    studio.clear().await;

    assert!(studio.surface().await.is_blank());
    assert!(!studio.pen().await.drawing);
    assert!(!studio.pointer(PointerEvent::Move { x: 50, y: 50 }).await);
}

#[tokio::test]
async fn test_dropped_caller_does_not_strand_mint() {
    let gate = Arc::new(Notify::new());
    let contract = Arc::new(MockContract::new(common::NFT_ABI).gated(gate.clone()));
    let studio = common::studio(common::available(MockWallet::new(contract.clone())));
    studio.connect().await.unwrap();

    let caller = tokio::spawn({
        let studio = studio.clone();
        async move { studio.mint().await }
    });
    while contract.calls().len() < 3 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    caller.abort();
    assert!(caller.await.unwrap_err().is_cancelled());
    assert!(studio.view().await.minting);

    gate.notify_one();
    common::wait_for(&studio, |view| !view.minting).await;

    let view = studio.view().await;
    assert!(view.error.is_none());
    assert_eq!(view.last_mint.unwrap().tx_hash, common::tx_hash());
    assert!(view.mint_enabled);
}

#[tokio::test]
async fn test_mint_rejected_while_reconnecting() {
    let gate = Arc::new(Notify::new());
    let contract = Arc::new(MockContract::new(common::NFT_ABI));
    let wallet = Arc::new(MockWallet::new(contract.clone()).gated_network(gate.clone()));
    let studio = common::studio(WalletAvailability::Available(wallet.clone()));

    gate.notify_one();
    studio.connect().await.unwrap();

    let reconnect = tokio::spawn({
        let studio = studio.clone();
        async move { studio.connect().await }
    });
    while wallet.account_requests.load(Ordering::SeqCst) < 2 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let view = studio.view().await;
    assert!(view.connecting);
    assert!(view.connected);
    assert!(!view.mint_enabled);
    assert_eq!(studio.mint().await.unwrap_err(), StudioError::ConnectInFlight);
    assert_eq!(studio.connect().await.unwrap_err(), StudioError::ConnectInFlight);
    assert!(contract.calls().is_empty());

    gate.notify_one();
    let view = reconnect.await.unwrap().unwrap();
    assert!(view.connected);
    assert!(!view.connecting);
    assert!(!view.minting);
    assert!(view.error.is_none());

    studio.mint().await.unwrap();
    assert_eq!(contract.calls().len(), 3);
}
