//! ShipStation Endpoint Core - Shared types library.
//!
//! This crate provides the hub-facing data model used across the endpoint
//! components:
//! - `endpoint` - The HTTP service that maps hub payloads onto ShipStation
//! - `integration-tests` - End-to-end tests driving the service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! here mirrors the hub's canonical shipment schema; the ShipStation-facing
//! resource types live in the `endpoint` crate next to the code that maps
//! between the two.
//!
//! # Modules
//!
//! - [`types`] - Normalized shipments, addresses, line items, and the sync cursor

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
