use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};

use alloy_primitives::TxHash;
use parking_lot::Mutex;
use tokio::{net::TcpListener, sync::oneshot};
use uuid::Uuid;

use crate::wallet_browser::{
    error::BrowserWalletError,
    router::build_router,
    state::BrowserWalletState,
    types::{BrowserTransaction, Connection, ConnectionStatus},
};

/// How often pending operations check for an answer from the page.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Local HTTP server hosting the page that relays requests to the browser's wallet.
///
/// The page polls the server for account and transaction requests and posts back what the
/// wallet answered. Clones share the same state.
#[derive(Clone, Debug)]
pub struct BrowserWalletServer {
    port: u16,
    timeout: Duration,
    state: Arc<BrowserWalletState>,
    shutdown: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl BrowserWalletServer {
    /// Creates a server for `port` (0 picks a free port on start).
    ///
    /// `timeout` bounds every wait for the user.
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            state: Arc::new(BrowserWalletState::new(Uuid::new_v4().simple().to_string())),
            shutdown: Arc::new(Mutex::new(None)),
        }
    }

    /// Binds to localhost and starts serving in the background.
    pub async fn start(&mut self) -> Result<(), BrowserWalletError> {
        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))).await?;
        self.port = listener.local_addr()?.port();

        let (tx, rx) = oneshot::channel();
        *self.shutdown.lock() = Some(tx);

        let router = build_router(self.state.clone());
        tokio::spawn(async move {
            let server = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = rx.await;
            });
            if let Err(err) = server.await {
                error!(%err, "browser wallet server failed");
            }
        });

        debug!(port = self.port, "browser wallet server started");
        Ok(())
    }

    /// Shuts the server down. Pending operations run into their timeout.
    pub async fn stop(&mut self) -> Result<(), BrowserWalletError> {
        if let Some(tx) = self.shutdown.lock().take() {
            tx.send(()).map_err(|()| BrowserWalletError::Server("server already stopped".into()))?;
        }
        Ok(())
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Address of the bridge page.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Token the page authenticates its API calls with.
    pub fn session_token(&self) -> String {
        self.state.session_token().to_string()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state.status()
    }

    pub fn is_connected(&self) -> bool {
        self.connection().is_some()
    }

    pub fn connection(&self) -> Option<Connection> {
        match self.state.status() {
            ConnectionStatus::Connected(connection) => Some(connection),
            _ => None,
        }
    }

    /// Asks the page to prompt for account access and waits for the outcome.
    pub async fn request_connection(&self) -> Result<Connection, BrowserWalletError> {
        if self.state.status() == ConnectionStatus::ProviderMissing {
            return Err(BrowserWalletError::ProviderMissing);
        }

        self.state.request_connection();
        let answered = self
            .poll_until(|| {
                let info = self.state.connection_info();
                (!info.connect_requested).then_some(info.status)
            })
            .await;

        match answered {
            Some(ConnectionStatus::Connected(connection)) => Ok(connection),
            Some(ConnectionStatus::Rejected { reason }) => {
                Err(BrowserWalletError::Rejected { operation: "Connection", reason })
            }
            Some(ConnectionStatus::ProviderMissing) => Err(BrowserWalletError::ProviderMissing),
            Some(_) => Err(BrowserWalletError::NotConnected),
            None => {
                self.state.cancel_connection_request();
                Err(BrowserWalletError::Timeout { operation: "Connection", timeout: self.timeout })
            }
        }
    }

    /// Queues a transaction for the page and waits until the wallet sent or rejected it.
    pub async fn request_transaction(
        &self,
        request: BrowserTransaction,
    ) -> Result<TxHash, BrowserWalletError> {
        if !self.is_connected() {
            return Err(BrowserWalletError::NotConnected);
        }

        let id = request.id;
        self.state.add_transaction_request(request);
        debug!(%id, "queued browser transaction");

        let Some(response) = self.poll_until(|| self.state.get_transaction_response(&id)).await
        else {
            self.state.remove_transaction_request(&id);
            return Err(BrowserWalletError::Timeout { operation: "Transaction", timeout: self.timeout });
        };

        match (response.hash, response.error) {
            (Some(hash), _) => Ok(hash),
            (None, Some(reason)) => {
                Err(BrowserWalletError::Rejected { operation: "Transaction", reason })
            }
            (None, None) => Err(BrowserWalletError::Server("empty transaction response".into())),
        }
    }

    async fn poll_until<T>(&self, mut check: impl FnMut() -> Option<T>) -> Option<T> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(value) = check() {
                return Some(value);
            }
            if Instant::now() >= deadline {
                return None;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
