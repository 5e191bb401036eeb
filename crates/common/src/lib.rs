//! Common utilities for the dapp crates: amount conversion, user notifications and error
//! display helpers.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod errors;
pub mod notify;
pub mod units;

pub use notify::{Level, Notification, Notify, RecordingNotifier};
pub use units::{DEFAULT_DECIMALS, UnitsError, format_amount, parse_amount};
