//! Store of orders waiting at the checkout page, keyed by session id.

pub mod entity;

use uuid::Uuid;

/// Opaque id carried by the checkout session cookie.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}
