#[macro_use]
mod macros;
pub mod checkout_client;
pub mod order_client;
pub mod notification_client;

pub use checkout_client::*;
pub use order_client::*;
pub use notification_client::*;
