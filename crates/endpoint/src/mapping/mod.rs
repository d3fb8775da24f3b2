//! Mapping between the hub's normalized schema and ShipStation resources.
//!
//! This is the core of the endpoint. Each submodule owns one direction of
//! one concern:
//!
//! - [`address`] - normalized address ↔ ShipStation address
//! - [`items`] - normalized line items → order items
//! - [`codes`] - carrier/service/package display names → ShipStation codes
//! - [`order`] - everything composed into one order create/update document

pub mod address;
pub mod codes;
pub mod items;
pub mod order;
