use crate::{ALICE, context};
use alloy_primitives::B256;
use alloy_sol_types::{SolCall, SolValue};
use dapp::MessageScreen;
use dapp_bridge::{CallResult, IMessageBoard, MESSAGE_BOARD_ADDRESS};
use dapp_common::Level;
use dapp_wallets::{
    Receipt,
    mock::{MockRequest, MockWallet},
};
use similar_asserts::assert_eq;

#[tokio::test]
async fn get_message_connects_then_reads() {
    let wallet = MockWallet::new().grant_on_request(vec![ALICE]);
    wallet.push_call("gm".to_string().abi_encode());
    let (ctx, _) = context(Some(&wallet));
    let mut screen = MessageScreen::new(ctx);

    assert_eq!(screen.get_message().await, CallResult::Value("gm".into()));
    assert_eq!(screen.state().message.as_deref(), Some("gm"));
    assert_eq!(
        wallet.requests(),
        vec![
            MockRequest::RequestAccounts,
            MockRequest::Call {
                to: Some(MESSAGE_BOARD_ADDRESS),
                input: IMessageBoard::getMessageCall {}.abi_encode().into(),
            },
        ]
    );
}

#[tokio::test]
async fn set_message_after_rejected_connection_sends_nothing() {
    let wallet = MockWallet::new().reject_requests("User rejected the request.");
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = MessageScreen::new(ctx);

    let result = screen.set_message("hello").await;

    assert_eq!(result, CallResult::failure("not connected"));
    assert!(!screen.state().session.is_connected());
    assert_eq!(wallet.requests(), vec![MockRequest::RequestAccounts]);
    assert_eq!(
        notifier.messages(Level::Error),
        vec!["Wallet connection rejected: User rejected the request.".to_string()]
    );
}

#[tokio::test]
async fn set_message_waits_for_the_receipt() {
    let wallet = MockWallet::new().grant_on_request(vec![ALICE]);
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = MessageScreen::new(ctx);

    let result = screen.set_message("hello board").await;

    let CallResult::Receipt(receipt) = result else { panic!("expected a receipt, got {result:?}") };
    let requests = wallet.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[1],
        MockRequest::SendTransaction {
            from: Some(ALICE),
            to: Some(MESSAGE_BOARD_ADDRESS),
            input: IMessageBoard::setMessageCall { message: "hello board".into() }
                .abi_encode()
                .into(),
            value: None,
        }
    );
    assert_eq!(
        requests[2],
        MockRequest::WaitForReceipt { tx_hash: receipt.transaction_hash, confirmations: 1 }
    );
    assert_eq!(notifier.messages(Level::Success).len(), 2);
}

#[tokio::test]
async fn reverted_set_message_is_a_failure() {
    let wallet = MockWallet::new().grant_on_request(vec![ALICE]);
    wallet.push_receipt(Ok(Receipt {
        transaction_hash: B256::repeat_byte(0xab),
        block_number: Some(3),
        gas_used: 25_000,
        status: false,
        from: ALICE,
        to: Some(MESSAGE_BOARD_ADDRESS),
    }));
    let (ctx, notifier) = context(Some(&wallet));
    let mut screen = MessageScreen::new(ctx);

    let result = screen.set_message("hello").await;

    let requests = wallet.requests();
    let Some(MockRequest::WaitForReceipt { tx_hash, .. }) = requests.last() else {
        panic!("expected a receipt wait, got {requests:?}");
    };
    assert_eq!(result, CallResult::failure(format!("transaction reverted: {tx_hash}")));
    assert_eq!(
        notifier.messages(Level::Error),
        vec![format!("Setting the message failed: transaction reverted: {tx_hash}")]
    );
}
