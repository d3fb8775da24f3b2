//! Hub-facing types for the ShipStation endpoint.
//!
//! These structs deserialize directly from the hub's JSON envelopes and are
//! read-only within a request; nothing here is ever persisted.

pub mod address;
pub mod cursor;
pub mod shipment;

pub use address::NormalizedAddress;
pub use cursor::SyncCursor;
pub use shipment::{
    NormalizedLineItem, NormalizedShipment, ShipmentStatus, ShipmentTotals, ShipmentUpdate,
};
