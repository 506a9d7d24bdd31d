//! Outbox of notification emails, keyed by a generated message id.

pub mod entity;

use uuid::Uuid;

pub fn new_email_id() -> String {
    Uuid::new_v4().simple().to_string()
}
