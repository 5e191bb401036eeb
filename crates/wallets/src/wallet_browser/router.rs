//! HTTP surface of the bridge: the page at `/` and its JSON API under `/api`.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};

use crate::wallet_browser::{handlers, state::BrowserWalletState};

/// Header carrying the per-server session token.
pub(crate) const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

type BridgeRouter = Router<Arc<BrowserWalletState>>;

pub(crate) fn build_router(state: Arc<BrowserWalletState>) -> Router {
    Router::new()
        .route("/", get(handlers::serve_index))
        .nest("/api", api(state.clone()))
        .layer(middleware::from_fn(require_loopback_host))
        .with_state(state)
}

/// The endpoints the page polls. Every call must present the session token.
fn api(state: Arc<BrowserWalletState>) -> BridgeRouter {
    Router::new()
        .route(
            "/connection",
            get(handlers::get_connection_info).post(handlers::post_connection_update),
        )
        .route("/transaction/request", get(handlers::get_next_transaction_request))
        .route("/transaction/response", post(handlers::post_transaction_response))
        .route_layer(middleware::from_fn_with_state(state, require_session_token))
}

async fn require_session_token(
    State(state): State<Arc<BrowserWalletState>>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req.headers().get(SESSION_TOKEN_HEADER).and_then(|v| v.to_str().ok());
    if token != Some(state.session_token().as_str()) {
        warn!(path = %req.uri().path(), "rejected bridge API call without a valid session token");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}

/// Only serves requests addressed to the loopback interface, so a page on another origin
/// cannot reach the bridge through a rebound DNS name.
async fn require_loopback_host(req: Request, next: Next) -> Result<Response, StatusCode> {
    let host = req.headers().get(header::HOST).and_then(|v| v.to_str().ok()).unwrap_or_default();
    if !is_loopback_host(host) {
        warn!(%host, "rejected bridge request for a foreign host");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}

fn is_loopback_host(host: &str) -> bool {
    let name = match host.rsplit_once(':') {
        Some((name, port)) if !port.contains(']') => name,
        _ => host,
    };
    matches!(name, "127.0.0.1" | "localhost" | "[::1]")
}
