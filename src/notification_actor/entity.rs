use crate::actor_framework::Entity;
use crate::domain::{Email, EmailCreate};

impl Entity for Email {
    type Id = String;
    type CreatePayload = EmailCreate;

    fn from_create(id: String, params: EmailCreate) -> Result<Self, String> {
        if params.to.trim().is_empty() {
            return Err("email without recipient".to_string());
        }
        Ok(Self {
            id,
            to: params.to,
            subject: params.subject,
            body: params.body,
        })
    }
}
