//! Interface descriptors and deployment addresses of the contracts.

use alloy_primitives::{Address, address};
use alloy_sol_types::sol;

/// The deployed message board.
pub const MESSAGE_BOARD_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

/// The deployed vault.
pub const VAULT_ADDRESS: Address = address!("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512");

sol! {
    /// Stores a single public message.
    #[derive(Debug, PartialEq, Eq)]
    interface IMessageBoard {
        function setMessage(string message) external;
        function getMessage() external view returns (string);
    }
}

sol! {
    /// Holds native currency per depositor.
    #[derive(Debug, PartialEq, Eq)]
    interface IVault {
        /// Balance of the caller, in base units.
        function getBalance() external view returns (uint256);
        function deposit(uint256 amount) external payable;
        function withdraw(uint256 amount) external;
    }
}
