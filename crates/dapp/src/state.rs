use dapp_wallets::Session;

/// Everything a screen displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Session,
    /// Last message read from the board.
    pub message: Option<String>,
    /// Last vault balance read, as a decimal string.
    pub balance: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
