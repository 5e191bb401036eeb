use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::{Html, IntoResponse},
};

use crate::wallet_browser::{
    app::contents,
    state::BrowserWalletState,
    types::{
        BrowserApiResponse, BrowserTransaction, ConnectionInfo, ConnectionStatus,
        TransactionResponse,
    },
};

pub(crate) async fn serve_index(State(state): State<Arc<BrowserWalletState>>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (headers, Html(contents::index_html(&state.session_token())))
}

pub(crate) async fn get_connection_info(
    State(state): State<Arc<BrowserWalletState>>,
) -> Json<BrowserApiResponse<ConnectionInfo>> {
    Json(BrowserApiResponse::with_data(state.connection_info()))
}

pub(crate) async fn post_connection_update(
    State(state): State<Arc<BrowserWalletState>>,
    Json(status): Json<ConnectionStatus>,
) -> Json<BrowserApiResponse> {
    debug!(?status, "browser wallet status update");
    state.set_status(status);
    Json(BrowserApiResponse::ok())
}

pub(crate) async fn get_next_transaction_request(
    State(state): State<Arc<BrowserWalletState>>,
) -> Json<BrowserApiResponse<BrowserTransaction>> {
    match state.read_next_transaction_request() {
        Some(tx) => Json(BrowserApiResponse::with_data(tx)),
        None => Json(BrowserApiResponse::error("No pending transaction")),
    }
}

pub(crate) async fn post_transaction_response(
    State(state): State<Arc<BrowserWalletState>>,
    Json(response): Json<TransactionResponse>,
) -> Json<BrowserApiResponse> {
    if !state.has_transaction_request(&response.id) {
        return Json(BrowserApiResponse::error("Unknown transaction id"));
    }
    if response.hash.is_none() && response.error.is_none() {
        return Json(BrowserApiResponse::error("Either hash or error must be set"));
    }
    state.add_transaction_response(response);
    Json(BrowserApiResponse::ok())
}
