//! Studio API handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::blockchain::MintReceipt;
use crate::canvas::{Color, PointerEvent};
use crate::error::StudioError;
use crate::http::server::AppState;
use crate::session::SessionView;
use crate::studio::PenView;

/// A [`StudioError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub StudioError);

impl From<StudioError> for ApiError {
    fn from(err: StudioError) -> Self {
        Self(err)
    }
}

/// Status code for each error kind.
pub fn status_for(err: &StudioError) -> StatusCode {
    match err {
        StudioError::ProviderUnavailable { .. } | StudioError::NotConnected => {
            StatusCode::PRECONDITION_FAILED
        }
        StudioError::MintInFlight | StudioError::ConnectInFlight => StatusCode::CONFLICT,
        StudioError::ContractMethodMissing { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        StudioError::ConnectionFailed { .. } | StudioError::TransactionFailed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": &self.0,
            "message": self.0.to_string(),
        });
        (status_for(&self.0), Json(body)).into_response()
    }
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointerOutcome {
    pub painted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColorRequest {
    pub color: Color,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.studio.view().await)
}

pub async fn reconnect(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    tracing::info!("Reconnect requested");
    Ok(Json(state.studio.connect().await?))
}

pub async fn pointer(
    State(state): State<AppState>,
    Json(event): Json<PointerEvent>,
) -> Json<PointerOutcome> {
    let painted = state.studio.pointer(event).await;
    Json(PointerOutcome { painted })
}

pub async fn get_canvas(State(state): State<AppState>) -> Json<PenView> {
    Json(state.studio.pen().await)
}

pub async fn set_color(
    State(state): State<AppState>,
    Json(request): Json<ColorRequest>,
) -> Json<PenView> {
    state.studio.set_color(request.color).await;
    Json(state.studio.pen().await)
}

pub async fn clear_canvas(State(state): State<AppState>) -> StatusCode {
    state.studio.clear().await;
    StatusCode::NO_CONTENT
}

pub async fn export_png(State(state): State<AppState>) -> Response {
    match state.studio.export_png().await {
        Ok(png) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to export canvas");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode canvas").into_response()
        }
    }
}

pub async fn mint(State(state): State<AppState>) -> Result<Json<MintReceipt>, ApiError> {
    Ok(Json(state.studio.mint().await?))
}
