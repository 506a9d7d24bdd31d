//! Store of placed orders, keyed by their `NNN-NNN` number.

pub mod entity;
pub mod number;

pub use number::*;
