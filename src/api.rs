//! REST API for the portfolio advisor engine
//!
//! Exposes the query pipeline via HTTP endpoints:
//! classify → fetch snapshot → synthesize → disclaimer → follow-ups

use axum::{extract::State, routing::get, routing::post, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::classifier::IntentClassifier;
use crate::compliance::ensure_disclaimer;
use crate::error::{AdvisorError, Result};
use crate::models::{
    CatalogResponse, ChatRequest, ChatResponse, PortfolioProjection, PortfolioSummary, QueryIntent,
};
use crate::provider::PortfolioProvider;
use crate::registry::TemplateRegistry;
use crate::synthesizer::Synthesizer;

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub provider: Arc<dyn PortfolioProvider>,
    pub registry: Arc<TemplateRegistry>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Submit Query Endpoint
/// =============================

async fn submit_query(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = req
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let query_type = req
        .query_type
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    if message.is_none() && query_type.is_none() {
        return Err(AdvisorError::InvalidRequest);
    }

    // Unknown queryType ids are not rejected: they count as "no explicit
    // intent" and fall through to keyword matching, else the overview.
    let explicit = query_type.and_then(QueryIntent::from_id);
    let intent = IntentClassifier::classify(explicit, message);
    info!(
        "Query resolved: queryType={:?} intent={:?}",
        query_type, intent
    );

    let snapshot = state.provider.snapshot().await?;

    let text = ensure_disclaimer(Synthesizer::synthesize(intent, &snapshot));

    Ok(Json(ChatResponse {
        success: true,
        response: text,
        query_type: intent,
        follow_up_questions: state.registry.follow_ups(),
        portfolio: PortfolioProjection {
            total_value: snapshot.total_value,
            metrics: snapshot.metrics,
            master_market_view: snapshot.master_market_view,
        },
    }))
}

/// =============================
/// Quick Action Catalog Endpoint
/// =============================

async fn fetch_catalog(State(state): State<ApiState>) -> Result<Json<CatalogResponse>> {
    let snapshot = state.provider.snapshot().await?;

    let top_holding = snapshot
        .holdings
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value))
        .map(|h| h.symbol.clone())
        .unwrap_or_default();

    Ok(Json(CatalogResponse {
        quick_actions: state.registry.quick_actions().to_vec(),
        portfolio_summary: PortfolioSummary {
            total_value: snapshot.total_value,
            total_return: snapshot.total_return_pct,
            holdings: snapshot.holdings.len(),
            top_holding,
            master_market_view: snapshot.master_market_view,
        },
        system_prompt: state.registry.system_prompt().to_string(),
    }))
}

/// =============================
/// Router
/// =============================

pub fn create_router(provider: Arc<dyn PortfolioProvider>, registry: Arc<TemplateRegistry>) -> Router {
    let state = ApiState { provider, registry };

    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(submit_query))
        .route("/api/quick-actions", get(fetch_catalog))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    provider: Arc<dyn PortfolioProvider>,
    registry: Arc<TemplateRegistry>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(provider, registry);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
