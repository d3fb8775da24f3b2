//! ShipStation REST resource types.
//!
//! These mirror the remote schema (camelCase on the wire) and stay strictly
//! separate from the hub-facing types in `shipstation-endpoint-core`; the
//! `mapping` module is the only place the two meet.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status codes ShipStation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatusCode {
    AwaitingShipment,
    OnHold,
    Cancelled,
    Shipped,
    /// Statuses this endpoint never produces (awaiting_payment and friends)
    /// but may read back on order records.
    #[serde(other)]
    Other,
}

/// Address in ShipStation's schema.
///
/// The required fields are exactly the ones the address mapper refuses to
/// send without: name, street1, city, state, postal code, country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAddress {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub street1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

/// One order item in an order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: i32,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<Decimal>,
    /// Free-form item properties flattened to `key:value` lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

/// Store-scoped extras on an order payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_alcohol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_machinable: Option<bool>,
}

impl AdvancedOptions {
    /// True when no field is set; the assembler drops the whole object from
    /// the payload in that case instead of sending `{}`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store_id.is_none()
            && self.custom_field_1.is_none()
            && self.custom_field_2.is_none()
            && self.custom_field_3.is_none()
            && self.contains_alcohol.is_none()
            && self.saturday_delivery.is_none()
            && self.non_machinable.is_none()
    }
}

/// Outbound order document for `POST /orders/createorder`.
///
/// ShipStation upserts on `orderKey`: absent key creates, present key
/// updates. Optional fields are sparse, never zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub order_status: OrderStatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
    pub bill_to: RemoteAddress,
    pub ship_to: RemoteAddress,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItemPayload>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_total: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_paid: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax_amount: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    /// Free-text service override; when set, no carrier/service/package
    /// codes are resolved or sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_shipping_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_until_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<AdvancedOptions>,
}

/// Order record as ShipStation returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: i64,
    pub order_number: String,
    #[serde(default)]
    pub order_key: Option<String>,
    #[serde(default)]
    pub order_status: Option<OrderStatusCode>,
    #[serde(default)]
    pub ship_to: Option<RemoteAddress>,
}

/// Response page for `GET /orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// Shipment record as ShipStation returns it.
///
/// `create_date`/`ship_date` stay as raw strings: the wire format changed
/// across API generations (naive timestamps vs. bare dates, all in
/// ShipStation's own reporting clock), so the poller parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub shipment_id: i64,
    pub order_id: i64,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub ship_date: Option<String>,
    #[serde(default)]
    pub ship_to: Option<RemoteAddress>,
}

/// Response page for `GET /shipments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPage {
    #[serde(default)]
    pub shipments: Vec<ShipmentRecord>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// Query for `GET /shipments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentQuery {
    /// Day-granular lower bound (`YYYY-MM-DD`) in ShipStation's clock; the
    /// caller filters precisely afterwards.
    pub create_date_start: String,
    pub page: u32,
    pub page_size: u32,
}

/// Carrier as listed by `GET /carriers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub name: String,
    pub code: String,
}

/// Service as listed by `GET /carriers/listservices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierService {
    #[serde(default)]
    pub carrier_code: Option<String>,
    pub code: String,
    pub name: String,
}

/// Package as listed by `GET /carriers/listpackages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierPackage {
    #[serde(default)]
    pub carrier_code: Option<String>,
    pub code: String,
    pub name: String,
}
