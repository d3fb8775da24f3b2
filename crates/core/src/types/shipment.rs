//! Normalized shipment, line items, and the hub-facing shipment update.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::NormalizedAddress;

/// Hub-side shipment status.
///
/// The hub spells cancellation both ways (`cancelled`/`canceled`); both
/// deserialize to [`ShipmentStatus::Cancelled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentStatus {
    #[default]
    Open,
    Hold,
    #[serde(alias = "canceled")]
    Cancelled,
    Shipped,
}

impl ShipmentStatus {
    /// Hub wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Hold => "hold",
            Self::Cancelled => "cancelled",
            Self::Shipped => "shipped",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monetary totals attached to a shipment.
///
/// All fields are optional; absent amounts stay out of the remote payload
/// rather than being zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShipmentTotals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Decimal>,
}

/// One ordered line item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product identifier (SKU on the ShipStation side).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form item properties, keyed by display name.
    ///
    /// Insertion order is preserved end to end (`serde_json` runs with
    /// `preserve_order`); the item mapper flattens these into `key:value`
    /// lines for ShipStation's options text field. Older hub payloads call
    /// this field `options`.
    #[serde(default, alias = "options", skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// A shipment as the hub sends it to `/add_order`, `/add_shipment`, and
/// `/update_shipment`.
///
/// `id` doubles as the ShipStation order number, which is how the poller
/// later correlates remote shipments back to hub orders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedShipment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(default)]
    pub status: ShipmentStatus,
    /// Release timestamp for `status = "hold"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<NormalizedAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<NormalizedAddress>,
    /// Older hub payloads call this field `line_items`.
    #[serde(default, alias = "line_items", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NormalizedLineItem>,
    /// Carrier display name, e.g. `"UPS"`. Resolved to a carrier code per
    /// request unless `requested_shipping_service` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_carrier: Option<String>,
    /// Service display name scoped to the carrier, e.g. `"UPS Ground"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    /// Package display name scoped to the carrier, e.g. `"Package"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Free-text service override; passed to ShipStation verbatim instead of
    /// resolving carrier/service/package codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_shipping_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<ShipmentTotals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_3: Option<String>,
    /// Delivery confirmation type (`none`, `delivery`, `signature`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_alcohol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_machinable: Option<bool>,
}

/// One shipped-order notification emitted by the poller.
///
/// `id` is the hub's own order identifier recovered from the owning
/// ShipStation order; `status` is always [`ShipmentStatus::Shipped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentUpdate {
    pub id: String,
    /// ShipStation's shipment identifier.
    pub shipstation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    pub status: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<NormalizedAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_open() {
        assert_eq!(ShipmentStatus::default(), ShipmentStatus::Open);
    }

    #[test]
    fn test_status_accepts_both_cancellation_spellings() {
        let cancelled: ShipmentStatus = serde_json::from_str("\"cancelled\"").expect("serde");
        let canceled: ShipmentStatus = serde_json::from_str("\"canceled\"").expect("serde");
        assert_eq!(cancelled, ShipmentStatus::Cancelled);
        assert_eq!(canceled, ShipmentStatus::Cancelled);
    }

    #[test]
    fn test_status_round_trips_lowercase() {
        let json = serde_json::to_string(&ShipmentStatus::Shipped).expect("serde");
        assert_eq!(json, "\"shipped\"");
    }

    #[test]
    fn test_deserialize_hub_shipment() {
        let shipment: NormalizedShipment = serde_json::from_str(
            r#"{
                "id": "4325435345345",
                "shipping_address": {
                    "firstname": "Bruno",
                    "lastname": "Buccolo",
                    "address1": "Rua Canario, 183",
                    "zipcode": "01155-030",
                    "city": "São Paulo",
                    "state": "SP",
                    "country": "BR"
                },
                "items": [{
                    "name": "Spree T-Shirt",
                    "product_id": "SPREE-T-SHIRT",
                    "quantity": 9,
                    "price": 9,
                    "options": {}
                }],
                "shipping_carrier": "UPS",
                "shipping_method": "UPS Ground",
                "created_at": "2014-06-02T15:38:23Z"
            }"#,
        )
        .expect("valid shipment json");

        assert_eq!(shipment.id, "4325435345345");
        assert_eq!(shipment.status, ShipmentStatus::Open);
        assert_eq!(shipment.items.len(), 1);
        let item = shipment.items.first().expect("one item");
        assert_eq!(item.quantity, 9);
        assert_eq!(item.price, Some(Decimal::from(9)));
        assert!(item.properties.is_empty());
        assert_eq!(shipment.shipping_method.as_deref(), Some("UPS Ground"));
    }

    #[test]
    fn test_line_items_alias_accepted() {
        let shipment: NormalizedShipment = serde_json::from_str(
            r#"{"id": "1", "line_items": [{"product_id": "SKU-1", "quantity": 2}]}"#,
        )
        .expect("valid shipment json");
        assert_eq!(shipment.items.len(), 1);
    }

    #[test]
    fn test_item_properties_preserve_insertion_order() {
        let item: NormalizedLineItem = serde_json::from_str(
            r#"{"quantity": 1, "properties": {"zebra": "stripes", "apple": "red", "mango": "ripe"}}"#,
        )
        .expect("valid item json");

        let keys: Vec<&str> = item.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }
}
