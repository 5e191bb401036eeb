//! Wallet session tracking.

use alloy_primitives::Address;
use dapp_common::{Notification, Notify};
use std::sync::Arc;

use crate::{WalletError, WalletProvider};

/// Connection state of the wallet and the active account.
///
/// `connected` holds exactly when an address is present. Only [`SessionManager`] can change
/// a session, which makes it the single gate for state-changing contract calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    address: Option<Address>,
}

impl Session {
    /// A disconnected session.
    pub const fn new() -> Self {
        Self { address: None }
    }

    /// Whether a wallet account is active.
    pub const fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// The active account, if connected.
    pub const fn address(&self) -> Option<Address> {
        self.address
    }

    fn connect(&mut self, address: Address) {
        self.address = Some(address);
    }

    fn disconnect(&mut self) {
        self.address = None;
    }
}

/// Detects the wallet provider, requests access to it and keeps a [`Session`] in sync.
///
/// Provider failures never escape: they are reported through the [`Notify`] sink and turned
/// into a `false` return value.
pub struct SessionManager<W> {
    provider: Option<W>,
    notifier: Arc<dyn Notify>,
}

impl<W> std::fmt::Debug for SessionManager<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("provider_present", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}

impl<W: WalletProvider> SessionManager<W> {
    /// Creates a manager for the wallet found in the environment, if any.
    pub fn new(provider: Option<W>, notifier: Arc<dyn Notify>) -> Self {
        Self { provider, notifier }
    }

    /// The registered provider.
    pub fn provider(&self) -> Option<&W> {
        self.provider.as_ref()
    }

    /// The sink used for user-facing notifications.
    pub fn notifier(&self) -> &Arc<dyn Notify> {
        &self.notifier
    }

    /// Makes sure the user granted account access, prompting if necessary.
    ///
    /// Returns `false` without side effects if no provider is registered. On success the
    /// first returned account becomes the active address. Rejections and provider failures
    /// leave `session` untouched.
    pub async fn ensure_connected(&self, session: &mut Session) -> bool {
        let Some(provider) = &self.provider else {
            self.report(&WalletError::ProviderMissing);
            return false;
        };

        match provider.request_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(&address) => {
                    debug!(%address, "wallet connected");
                    session.connect(address);
                    self.notifier.notify(Notification::success(format!(
                        "Connected {}",
                        address.to_checksum(None)
                    )));
                    true
                }
                None => {
                    self.report(&WalletError::Rejected("the wallet returned no accounts".into()));
                    false
                }
            },
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Picks up an authorization granted earlier, without prompting.
    ///
    /// Returns `true` if the session is connected afterwards; callers use this to trigger the
    /// refresh of dependent state exactly once.
    pub async fn check_existing_connection(&self, session: &mut Session) -> bool {
        let Some(provider) = &self.provider else {
            debug!("no wallet provider registered, staying disconnected");
            return false;
        };

        match provider.accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(&address) => {
                    debug!(%address, "found authorized account");
                    session.connect(address);
                    true
                }
                None => {
                    trace!("no authorized accounts");
                    false
                }
            },
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Applies an account change reported by the provider.
    ///
    /// An empty list means the user disconnected the wallet.
    pub fn accounts_changed(&self, session: &mut Session, accounts: &[Address]) {
        match accounts.first() {
            Some(&address) => {
                debug!(%address, "active account changed");
                session.connect(address);
            }
            None => {
                debug!("wallet disconnected");
                session.disconnect();
                self.notifier.notify(Notification::info("Wallet disconnected"));
            }
        }
    }

    /// Re-reads the authorized accounts without prompting and returns them if the active
    /// account is no longer among them.
    ///
    /// Pages and extensions report disconnects and account switches asynchronously, so
    /// callers check this before a transaction and apply the result with
    /// [`accounts_changed`](Self::accounts_changed). Disconnected sessions are not probed.
    pub async fn account_change(&self, session: &Session) -> Option<Vec<Address>> {
        let provider = self.provider.as_ref()?;
        let current = session.address()?;
        match provider.accounts().await {
            Ok(accounts) if !accounts.contains(&current) => Some(accounts),
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "failed to re-read authorized accounts");
                None
            }
        }
    }

    fn report(&self, err: &WalletError) {
        warn!(%err, "wallet connection failed");
        let message = match err {
            WalletError::ProviderMissing => {
                "No wallet provider found. Please install MetaMask or another browser wallet."
                    .to_string()
            }
            WalletError::Rejected(reason) => format!("Wallet connection rejected: {reason}"),
            other => format!("Failed to connect wallet: {}", other.message()),
        };
        self.notifier.notify(Notification::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockRequest, MockWallet};
    use alloy_primitives::address;
    use dapp_common::{Level, RecordingNotifier};

    const ALICE: Address = address!("0xAA00000000000000000000000000000000000001");
    const BOB: Address = address!("0xbB00000000000000000000000000000000000002");

    fn manager(wallet: Option<MockWallet>) -> (SessionManager<MockWallet>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (SessionManager::new(wallet, notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn missing_provider() {
        let (manager, notifier) = manager(None);
        let mut session = Session::new();

        assert!(!manager.ensure_connected(&mut session).await);
        assert_eq!(session, Session::new());
        let errors = notifier.messages(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("install MetaMask"), "{errors:?}");

        assert!(!manager.check_existing_connection(&mut session).await);
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn connects_first_account() {
        let wallet = MockWallet::new().grant_on_request(vec![ALICE, BOB]);
        let (manager, notifier) = manager(Some(wallet));
        let mut session = Session::new();

        assert!(manager.ensure_connected(&mut session).await);
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(ALICE));
        assert_eq!(notifier.messages(Level::Success).len(), 1);
        assert_eq!(manager.provider().unwrap().requests(), [MockRequest::RequestAccounts]);
    }

    #[tokio::test]
    async fn rejection_leaves_session_unchanged() {
        let wallet = MockWallet::new().reject_requests("User rejected the request.");
        let (manager, notifier) = manager(Some(wallet));
        let mut session = Session::new();

        assert!(!manager.ensure_connected(&mut session).await);
        assert_eq!(session, Session::new());
        assert_eq!(
            notifier.messages(Level::Error),
            ["Wallet connection rejected: User rejected the request."]
        );
    }

    #[tokio::test]
    async fn empty_grant_is_not_a_connection() {
        let (manager, notifier) = manager(Some(MockWallet::new()));
        let mut session = Session::new();

        assert!(!manager.ensure_connected(&mut session).await);
        assert!(!session.is_connected());
        assert_eq!(notifier.messages(Level::Error).len(), 1);
    }

    #[tokio::test]
    async fn passive_probe_does_not_prompt() {
        let wallet = MockWallet::new().with_authorized(vec![ALICE]);
        let (manager, notifier) = manager(Some(wallet));
        let mut session = Session::new();

        assert!(manager.check_existing_connection(&mut session).await);
        assert_eq!(session.address(), Some(ALICE));
        assert_eq!(manager.provider().unwrap().requests(), [MockRequest::Accounts]);
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn passive_probe_without_accounts() {
        let (manager, _) = manager(Some(MockWallet::new()));
        let mut session = Session::new();
        assert!(!manager.check_existing_connection(&mut session).await);
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn account_changes() {
        let wallet = MockWallet::new().with_authorized(vec![ALICE]);
        let (manager, notifier) = manager(Some(wallet));
        let mut session = Session::new();
        manager.check_existing_connection(&mut session).await;

        manager.accounts_changed(&mut session, &[BOB]);
        assert_eq!(session.address(), Some(BOB));

        manager.accounts_changed(&mut session, &[]);
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);
        assert_eq!(notifier.messages(Level::Info), ["Wallet disconnected"]);
    }

    #[tokio::test]
    async fn detects_revoked_access() {
        let wallet = MockWallet::new().with_authorized(vec![ALICE, BOB]);
        let (manager, _) = manager(Some(wallet.clone()));
        let mut session = Session::new();
        assert_eq!(manager.account_change(&session).await, None);
        assert!(wallet.requests().is_empty());

        manager.check_existing_connection(&mut session).await;
        assert_eq!(manager.account_change(&session).await, None);

        wallet.set_authorized(vec![BOB]);
        assert_eq!(manager.account_change(&session).await, Some(vec![BOB]));

        wallet.set_authorized(vec![]);
        let accounts = manager.account_change(&session).await.unwrap();
        manager.accounts_changed(&mut session, &accounts);
        assert!(!session.is_connected());
    }
}
