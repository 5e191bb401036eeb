use crate::{ALICE, BOB, context, ether, init_tracing};
use alloy_primitives::U256;
use alloy_sol_types::{SolCall, SolValue};
use dapp::VaultScreen;
use dapp_bridge::{CallResult, IVault, VAULT_ADDRESS};
use dapp_common::Level;
use dapp_wallets::{
    WalletError,
    mock::{MockRequest, MockWallet},
};
use similar_asserts::assert_eq;

fn balance_query() -> MockRequest {
    MockRequest::Call { to: Some(VAULT_ADDRESS), input: IVault::getBalanceCall {}.abi_encode().into() }
}

fn balance_queries(wallet: &MockWallet) -> usize {
    wallet.requests().iter().filter(|r| **r == balance_query()).count()
}

#[tokio::test]
async fn existing_connection_refreshes_balance_once() {
    init_tracing();
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(U256::from(2_500_000_000_000_000_000u128).abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);

    assert!(screen.init().await);

    assert!(screen.state().session.is_connected());
    assert_eq!(screen.state().session.address(), Some(ALICE));
    assert_eq!(screen.state().balance.as_deref(), Some("2.5"));
    assert_eq!(wallet.requests(), vec![MockRequest::Accounts, balance_query()]);
    assert!(notifier.messages(Level::Error).is_empty());
}

#[tokio::test]
async fn no_authorized_account_stays_disconnected() {
    let wallet = MockWallet::new();
    let (ctx, _) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);

    assert!(!screen.init().await);
    assert!(!screen.state().session.is_connected());
    assert_eq!(screen.state().balance, None);
    assert_eq!(wallet.requests(), vec![MockRequest::Accounts]);
}

#[tokio::test]
async fn deposit_while_disconnected_stays_local() {
    let wallet = MockWallet::new();
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);

    let result = screen.handle_deposit("1.0").await;

    assert_eq!(result, CallResult::failure("not connected"));
    assert!(wallet.requests().is_empty());
    assert_eq!(notifier.messages(Level::Error), vec!["Please connect your wallet first".to_string()]);
}

#[tokio::test]
async fn deposit_refreshes_balance_once() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(ether("2.5").abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);
    wallet.clear_requests();

    wallet.push_call(ether("3.5").abi_encode());
    let result = screen.handle_deposit("1.0").await;

    let CallResult::Receipt(receipt) = result else { panic!("expected a receipt, got {result:?}") };
    assert!(receipt.status);
    assert_eq!(screen.state().balance.as_deref(), Some("3.5"));
    assert_eq!(
        wallet.requests(),
        vec![
            MockRequest::Accounts,
            MockRequest::SendTransaction {
                from: Some(ALICE),
                to: Some(VAULT_ADDRESS),
                input: IVault::depositCall { amount: ether("1") }.abi_encode().into(),
                value: Some(ether("1")),
            },
            MockRequest::WaitForReceipt { tx_hash: receipt.transaction_hash, confirmations: 1 },
            balance_query(),
        ]
    );
    assert_eq!(notifier.messages(Level::Success), vec!["Deposited 1.0".to_string()]);
}

#[tokio::test]
async fn failed_withdraw_keeps_session_and_balance() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(ether("2.5").abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);
    let before = screen.state().clone();

    wallet.push_send_error(WalletError::Rpc("insufficient funds".into()));
    let result = screen.handle_withdraw("5.0").await;

    assert_eq!(result, CallResult::failure("insufficient funds"));
    assert_eq!(screen.state(), &before);
    assert_eq!(balance_queries(&wallet), 1);
    assert_eq!(
        notifier.messages(Level::Error),
        vec!["Withdrawal failed: insufficient funds".to_string()]
    );

    // The next explicit refresh picks up whatever the chain says.
    wallet.push_call(ether("2.25").abi_encode());
    assert_eq!(screen.refresh_balance().await, CallResult::Value("2.25".into()));
    assert_eq!(screen.state().balance.as_deref(), Some("2.25"));
}

#[tokio::test]
async fn invalid_amount_is_reported() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(U256::ZERO.abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);
    wallet.clear_requests();

    let result = screen.handle_deposit("-1").await;

    assert!(!result.is_success());
    assert_eq!(wallet.requests(), vec![MockRequest::Accounts]);
    assert_eq!(notifier.messages(Level::Error).len(), 1);
}

#[tokio::test]
async fn connect_prompts_and_loads_balance() {
    let wallet = MockWallet::new().grant_on_request(vec![ALICE, BOB]);
    wallet.push_call(U256::ZERO.abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);

    assert!(screen.connect_wallet().await);

    assert_eq!(screen.state().session.address(), Some(ALICE));
    assert_eq!(screen.state().balance.as_deref(), Some("0.0"));
    assert_eq!(wallet.requests(), vec![MockRequest::RequestAccounts, balance_query()]);
    assert_eq!(notifier.messages(Level::Success).len(), 1);
}

#[tokio::test]
async fn missing_provider_is_reported() {
    let (ctx, notifier) = context(None);
    let mut screen = VaultScreen::new(ctx);

    assert!(!screen.init().await);
    assert!(!screen.connect_wallet().await);

    assert_eq!(screen.state(), &dapp::AppState::new());
    let errors = notifier.messages(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("No wallet provider found"), "{errors:?}");
}

#[tokio::test]
async fn account_changes_follow_the_wallet() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(ether("1").abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);

    wallet.push_call(ether("4").abi_encode());
    screen.accounts_changed(&[BOB]).await;
    assert_eq!(screen.state().session.address(), Some(BOB));
    assert_eq!(screen.state().balance.as_deref(), Some("4.0"));

    // Reporting the same account again does not trigger another read.
    screen.accounts_changed(&[BOB]).await;
    assert_eq!(balance_queries(&wallet), 2);

    screen.accounts_changed(&[]).await;
    assert!(!screen.state().session.is_connected());
    assert_eq!(screen.state().balance, None);
    assert_eq!(notifier.messages(Level::Info), vec!["Wallet disconnected".to_string()]);
}

#[tokio::test]
async fn disconnect_in_wallet_stops_the_next_deposit() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(ether("1").abi_encode());
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);
    wallet.clear_requests();

    wallet.set_authorized(vec![]);
    let result = screen.handle_deposit("1.0").await;

    assert_eq!(result, CallResult::failure("not connected"));
    assert!(!screen.state().session.is_connected());
    assert_eq!(screen.state().balance, None);
    assert_eq!(wallet.requests(), vec![MockRequest::Accounts]);
    assert_eq!(notifier.messages(Level::Info), vec!["Wallet disconnected".to_string()]);
    assert_eq!(notifier.messages(Level::Error), vec!["Please connect your wallet first".to_string()]);
}

#[tokio::test]
async fn withdraw_follows_an_account_switch() {
    let wallet = MockWallet::new().with_authorized(vec![ALICE]);
    wallet.push_call(ether("1").abi_encode());
    let (ctx, _) = context(Some(&wallet));
    let mut screen = VaultScreen::new(ctx);
    assert!(screen.init().await);

    wallet.set_authorized(vec![BOB]);
    wallet.push_call(ether("3").abi_encode());
    wallet.push_call(ether("2").abi_encode());
    let result = screen.handle_withdraw("1.0").await;

    assert!(result.is_success(), "{result:?}");
    assert_eq!(screen.state().session.address(), Some(BOB));
    assert_eq!(screen.state().balance.as_deref(), Some("2.0"));
    let sent = wallet
        .requests()
        .into_iter()
        .find(|request| matches!(request, MockRequest::SendTransaction { .. }));
    assert_eq!(
        sent,
        Some(MockRequest::SendTransaction {
            from: Some(BOB),
            to: Some(VAULT_ADDRESS),
            input: IVault::withdrawCall { amount: ether("1") }.abi_encode().into(),
            value: None,
        })
    );
}
