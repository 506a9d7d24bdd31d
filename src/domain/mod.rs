pub mod order;
pub mod customer;
pub mod payment;
pub mod checkout;
pub mod placed_order;
pub mod email;

pub use order::*;
pub use customer::*;
pub use payment::*;
pub use checkout::*;
pub use placed_order::*;
pub use email::*;
