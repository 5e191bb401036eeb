use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::wallet_browser::{
    queue::RequestQueue,
    types::{BrowserTransaction, ConnectionInfo, ConnectionStatus, TransactionResponse},
};

#[derive(Debug)]
pub(crate) struct BrowserWalletState {
    /// Last connection state reported by the page.
    status: Mutex<ConnectionStatus>,
    /// Set while an account request is waiting for the page to prompt the user.
    connect_requested: Mutex<bool>,
    /// Request/response queue for transactions.
    transactions: Mutex<RequestQueue<BrowserTransaction, TransactionResponse>>,
    /// Token the page must echo in `X-Session-Token`.
    session_token: Arc<String>,
}

impl BrowserWalletState {
    pub fn new(session_token: String) -> Self {
        Self {
            status: Mutex::new(ConnectionStatus::default()),
            connect_requested: Mutex::new(false),
            transactions: Mutex::new(RequestQueue::new()),
            session_token: Arc::new(session_token),
        }
    }

    pub fn session_token(&self) -> Arc<String> {
        self.session_token.clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status.lock().clone()
    }

    pub fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo { status: self.status(), connect_requested: *self.connect_requested.lock() }
    }

    /// Records a status reported by the page.
    ///
    /// Any outcome of a prompt answers a pending account request.
    pub fn set_status(&self, status: ConnectionStatus) {
        if !matches!(status, ConnectionStatus::Pending | ConnectionStatus::Disconnected) {
            *self.connect_requested.lock() = false;
        }
        *self.status.lock() = status;
    }

    /// Asks the page to prompt for account access on its next poll.
    pub fn request_connection(&self) {
        *self.connect_requested.lock() = true;
    }

    pub fn cancel_connection_request(&self) {
        *self.connect_requested.lock() = false;
    }

    pub fn add_transaction_request(&self, request: BrowserTransaction) {
        self.transactions.lock().add_request(request.id, request);
    }

    pub fn has_transaction_request(&self, id: &Uuid) -> bool {
        self.transactions.lock().has_request(id)
    }

    pub fn read_next_transaction_request(&self) -> Option<BrowserTransaction> {
        self.transactions.lock().read_request().cloned()
    }

    pub fn remove_transaction_request(&self, id: &Uuid) {
        self.transactions.lock().remove_request(id);
    }

    pub fn add_transaction_response(&self, response: TransactionResponse) {
        let id = response.id;
        let mut transactions = self.transactions.lock();
        transactions.add_response(id, response);
        transactions.remove_request(&id);
    }

    /// Takes the response for `id`, removing it from the queue.
    pub fn get_transaction_response(&self, id: &Uuid) -> Option<TransactionResponse> {
        self.transactions.lock().get_response(id)
    }
}
