//! JSON API consumed by the storefront quote and booking pages

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    QuoteEngine, QuoteError,
    config::{MoveNestConfig, PricingConfig},
    models::{Quote, QuoteRequest},
    summary,
};

/// Shared server state
///
/// The engine is swapped whole when pricing changes; handlers work on the
/// snapshot they cloned.
pub struct AppState {
    engine: RwLock<Arc<QuoteEngine>>,
    config: MoveNestConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: MoveNestConfig) -> Self {
        Self {
            engine: RwLock::new(Arc::new(QuoteEngine::new(config.pricing))),
            config,
        }
    }

    fn engine(&self) -> Result<Arc<QuoteEngine>, QuoteError> {
        self.engine
            .read()
            .map(|engine| Arc::clone(&*engine))
            .map_err(|_| QuoteError::general("quote engine lock poisoned"))
    }

    fn replace_pricing(&self, pricing: PricingConfig) -> Result<(), QuoteError> {
        let mut engine = self
            .engine
            .write()
            .map_err(|_| QuoteError::general("quote engine lock poisoned"))?;
        *engine = Arc::new(QuoteEngine::new(pricing));
        Ok(())
    }
}

#[derive(Serialize)]
pub struct WhatsAppQuote {
    pub quote: Quote,
    pub message: String,
    pub link: String,
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            QuoteError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, 101),
            QuoteError::Config { .. } => (StatusCode::BAD_REQUEST, 102),
            QuoteError::General { .. } => (StatusCode::INTERNAL_SERVER_ERROR, 1),
        };

        let body = Json(json!({
            "code": code,
            "error": self.user_message(),
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for QuoteError {
    fn from(rejection: JsonRejection) -> Self {
        QuoteError::invalid_input(rejection.body_text())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quote", post(create_quote))
        .route("/quote/whatsapp", post(create_whatsapp_quote))
        .route("/pricing", get(get_pricing).put(update_pricing))
        .with_state(state)
}

#[instrument(skip_all)]
async fn create_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<Quote>, QuoteError> {
    let Json(request) = payload?;
    let quote = state.engine()?.build_quote(&request)?;
    Ok(Json(quote))
}

#[instrument(skip_all)]
async fn create_whatsapp_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<WhatsAppQuote>, QuoteError> {
    let Json(request) = payload?;
    let quote = state.engine()?.build_quote(&request)?;
    let business = &state.config.business;
    let message = summary::whatsapp_message(&quote, business, state.config.display.distance_unit);
    let link = summary::whatsapp_link(&business.whatsapp_number, &message);

    Ok(Json(WhatsAppQuote {
        quote,
        message,
        link,
    }))
}

async fn get_pricing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PricingConfig>, QuoteError> {
    Ok(Json(*state.engine()?.pricing()))
}

#[instrument(skip_all)]
async fn update_pricing(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PricingConfig>, JsonRejection>,
) -> Result<Json<PricingConfig>, QuoteError> {
    let Json(pricing) = payload?;
    pricing.validate()?;
    state.replace_pricing(pricing)?;
    info!(
        rate_per_km = pricing.rate_per_km,
        monthly_discount = pricing.monthly_discount,
        "Pricing updated"
    );
    Ok(Json(pricing))
}
