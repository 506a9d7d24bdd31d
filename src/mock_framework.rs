//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns instead of a running
/// `ResourceActor`, so the test decides every reply (success, failure, silence).
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use crate::clients::{CheckoutClient, NotificationClient, OrderClient};
    use crate::domain::order::fixtures::{apples_and_milk, item};
    use crate::domain::{CustomerInfo, Email, Order, PaymentMethod, PendingCheckout, PlacedOrder};
    use crate::error::CheckoutError;
    use rust_decimal_macros::dec;

    type Receiver<T> = mpsc::Receiver<ResourceRequest<T>>;

    fn cutoff() -> NaiveTime {
        NaiveTime::from_hms_opt(15, 30, 0).unwrap()
    }

    fn order_client() -> (OrderClient, Receiver<PlacedOrder>, Receiver<Email>) {
        let (orders, order_rx) = create_mock_client::<PlacedOrder>(10);
        let (outbox, email_rx) = create_mock_client::<Email>(10);
        let notifications = NotificationClient::new(outbox, "sklep@example.com".to_string());
        (OrderClient::new(orders, notifications, cutoff()), order_rx, email_rx)
    }

    fn tuesday_morning() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_place_order_sends_delivery_date() {
        // Outbox receiver dropped: emails fail, the order still goes through.
        let (client, mut receiver, _) = order_client();

        let task = tokio::spawn(async move {
            let customer = CustomerInfo { city: "Poznań".to_string(), ..Default::default() };
            // Friday 13 June 2025, before the cutoff
            let placed_at = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap().and_hms_opt(11, 0, 0).unwrap();
            client.place_order(apples_and_milk(), customer, PaymentMethod::CashOnDelivery, placed_at).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        // The milk is next-day, so the weekend pushes delivery to Monday.
        assert_eq!(payload.delivery_date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(payload.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(payload.customer.city, "Poznań");
        responder.send(Ok("123-456".to_string())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "123-456");
    }

    #[tokio::test]
    async fn test_place_same_day_order_before_cutoff() {
        let (client, mut receiver, _) = order_client();
        let order = Order::new(vec![item("Chleb", dec!(5.99), "szt.", dec!(1), false)], dec!(5.99)).unwrap();

        let task = tokio::spawn(async move {
            let placed_at = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(15, 30, 0).unwrap();
            client.place_order(order, CustomerInfo::default(), PaymentMethod::Blik, placed_at).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.delivery_date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        responder.send(Ok("000-001".to_string())).unwrap();
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_shop_is_notified_and_customer_without_email_is_not() {
        let (client, mut orders, mut outbox) = order_client();

        let task = tokio::spawn(async move {
            let customer = CustomerInfo { city: "Gniezno".to_string(), ..Default::default() };
            client.place_order(apples_and_milk(), customer, PaymentMethod::Blik, tuesday_morning()).await
        });

        let (_, responder) = expect_create(&mut orders).await.expect("Expected order Create");
        responder.send(Ok("042-017".to_string())).unwrap();

        let (email, responder) = expect_create(&mut outbox).await.expect("Expected shop email");
        assert_eq!(email.to, "sklep@example.com");
        assert_eq!(email.subject, "Nowe zamówienie - Gniezno");
        assert!(email.body.starts_with("Złożono nowe zamówienie numer 042-017."));
        responder.send(Ok("mail-1".to_string())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "042-017");
        // Nothing else was queued, and the client is gone.
        assert!(outbox.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_customer_with_email_gets_confirmation() {
        let (client, mut orders, mut outbox) = order_client();

        let task = tokio::spawn(async move {
            let customer = CustomerInfo {
                city: "Gniezno".to_string(),
                email: "jan@example.com".to_string(),
                ..Default::default()
            };
            client.place_order(apples_and_milk(), customer, PaymentMethod::Blik, tuesday_morning()).await
        });

        let (_, responder) = expect_create(&mut orders).await.expect("Expected order Create");
        responder.send(Ok("042-017".to_string())).unwrap();

        let (shop_email, responder) = expect_create(&mut outbox).await.expect("Expected shop email");
        assert_eq!(shop_email.to, "sklep@example.com");
        responder.send(Ok("mail-1".to_string())).unwrap();

        let (confirmation, responder) = expect_create(&mut outbox).await.expect("Expected customer email");
        assert_eq!(confirmation.to, "jan@example.com");
        assert_eq!(confirmation.subject, "Potwierdzenie złożenia zamówienia");
        assert!(confirmation.body.starts_with("Dziękujemy za złożenie zamówienia numer 042-017."));
        responder.send(Ok("mail-2".to_string())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "042-017");
    }

    #[tokio::test]
    async fn test_failed_notification_keeps_the_order() {
        let (client, mut orders, mut outbox) = order_client();

        let task = tokio::spawn(async move {
            client.place_order(apples_and_milk(), CustomerInfo::default(), PaymentMethod::Blik, tuesday_morning()).await
        });

        let (_, responder) = expect_create(&mut orders).await.expect("Expected order Create");
        responder.send(Ok("042-017".to_string())).unwrap();
        let (_, responder) = expect_create(&mut outbox).await.expect("Expected shop email");
        responder.send(Err(FrameworkError::Rejected("outbox full".to_string()))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), "042-017");
    }

    #[tokio::test]
    async fn test_rejected_create_surfaces_as_actor_error() {
        let (inner, mut receiver) = create_mock_client::<PendingCheckout>(10);
        let client = CheckoutClient::new(inner);

        let task = tokio::spawn(async move { client.open_checkout(apples_and_milk()).await });

        let (order, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(order.items().len(), 2);
        responder.send(Err(FrameworkError::Rejected("no free id".to_string()))).unwrap();

        assert!(matches!(task.await.unwrap(), Err(CheckoutError::ActorCommunication(FrameworkError::Rejected(_)))));
    }

    #[tokio::test]
    async fn test_take_checkout_treats_missing_as_none() {
        let (inner, mut receiver) = create_mock_client::<PendingCheckout>(10);
        let client = CheckoutClient::new(inner);

        let lookup = client.clone();
        let task = tokio::spawn(async move { lookup.get_checkout("abc".to_string()).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "abc");
        responder.send(Ok(None)).unwrap();
        assert!(task.await.unwrap().unwrap().is_none());

        let task = tokio::spawn(async move { client.take_checkout("abc".to_string()).await });
        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "abc");
        responder.send(Err(FrameworkError::NotFound("abc".to_string()))).unwrap();
        assert!(task.await.unwrap().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver, _) = order_client();

        let task = tokio::spawn(async move { client.get_order("111-111".to_string()).await });
        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(CheckoutError::ActorCommunication(FrameworkError::ActorDropped))));
    }
}
