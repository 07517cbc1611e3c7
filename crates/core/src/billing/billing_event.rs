//! Consumed shape of inbound Stripe webhook events.

use serde::Deserialize;
use serde_json::Value;

/// Minimal Stripe event envelope. Only the fields the handler reads are
/// modeled; the embedded object stays untyped JSON because its shape varies
/// per event type.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeEventData {
    pub object: Value,
}

impl StripeEvent {
    /// Stripe customer id attached to the embedded object, when present.
    pub fn customer_id(&self) -> Option<&str> {
        self.data.object.get("customer").and_then(Value::as_str)
    }

    /// Price id of the first subscription item, falling back to the
    /// `priceId` checkout metadata set when the session was created.
    pub fn price_id(&self) -> Option<&str> {
        self.data
            .object
            .pointer("/items/data/0/price/id")
            .or_else(|| self.data.object.pointer("/metadata/priceId"))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subscription_event() {
        let event: StripeEvent = serde_json::from_value(serde_json::json!({
            "id": "evt_1",
            "type": "customer.subscription.updated",
            "data": {"object": {
                "customer": "cus_9",
                "status": "active",
                "items": {"data": [{"price": {"id": "price_pro"}}]}
            }}
        }))
        .unwrap();
        assert_eq!(event.event_type, "customer.subscription.updated");
        assert_eq!(event.customer_id(), Some("cus_9"));
        assert_eq!(event.price_id(), Some("price_pro"));
    }

    #[test]
    fn checkout_metadata_price_id_is_read() {
        let event: StripeEvent = serde_json::from_value(serde_json::json!({
            "id": "evt_2",
            "type": "checkout.session.completed",
            "data": {"object": {
                "customer": "cus_9",
                "client_reference_id": "user-1",
                "metadata": {"priceId": "price_agency"}
            }}
        }))
        .unwrap();
        assert_eq!(event.price_id(), Some("price_agency"));
    }
}
