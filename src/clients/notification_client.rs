use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Email, EmailCreate, PlacedOrder, CONFIRMATION_SUBJECT};
use crate::error::CheckoutError;

/// Client for the email outbox.
///
/// Every placed order produces a notification for the shop and, when the
/// customer left an address, a confirmation for the customer.
#[derive(Clone)]
pub struct NotificationClient {
    inner: ResourceClient<Email>,
    shop_email: String,
}

impl NotificationClient {
    pub fn new(inner: ResourceClient<Email>, shop_email: String) -> Self {
        Self { inner, shop_email }
    }

    #[instrument(skip(self, placed), fields(order_number = %placed.number))]
    pub async fn notify_shop(&self, placed: &PlacedOrder) -> Result<String, CheckoutError> {
        self.send(EmailCreate {
            to: self.shop_email.clone(),
            subject: placed.new_order_subject(),
            body: placed.new_order_message(),
        })
        .await
    }

    /// Returns `None` without sending when the customer gave no address.
    #[instrument(skip(self, placed), fields(order_number = %placed.number))]
    pub async fn confirm_to_customer(&self, placed: &PlacedOrder) -> Result<Option<String>, CheckoutError> {
        let to = placed.customer.email.trim();
        if to.is_empty() {
            debug!("No customer address, skipping confirmation");
            return Ok(None);
        }
        let id = self
            .send(EmailCreate {
                to: to.to_string(),
                subject: CONFIRMATION_SUBJECT.to_string(),
                body: placed.confirmation_message(),
            })
            .await?;
        Ok(Some(id))
    }

    async fn send(&self, email: EmailCreate) -> Result<String, CheckoutError> {
        debug!("Sending request");
        let (to, subject) = (email.to.clone(), email.subject.clone());
        let id = self.inner.create(email).await?;
        info!(email_id = %id, %to, %subject, "Email queued");
        Ok(id)
    }
}

impl_client_methods!(NotificationClient, Email, email);
