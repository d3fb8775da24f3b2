//! Carrier/service/package code resolution.
//!
//! The hub speaks display names ("UPS", "UPS Ground"); ShipStation wants its
//! own codes. Each resolution fetches the current list from the remote API
//! and matches the name exactly, case-sensitively. There is deliberately no
//! cache: order volume is low relative to the API's rate limits, and a stale
//! code is worse than an extra lookup.

use crate::shipstation::{RemoteGateway, ShipStationError};

/// Resolve a carrier display name to its ShipStation carrier code.
///
/// # Errors
///
/// Returns a lookup error naming the carrier if no exact match exists, or
/// any transport error from the listing call.
pub async fn resolve_carrier<G: RemoteGateway>(
    gateway: &G,
    name: &str,
) -> Result<String, ShipStationError> {
    gateway
        .list_carriers()
        .await?
        .into_iter()
        .find(|carrier| carrier.name == name)
        .map(|carrier| carrier.code)
        .ok_or_else(|| ShipStationError::UnknownCarrier(name.to_string()))
}

/// Resolve a service display name within a carrier.
///
/// # Errors
///
/// Returns a lookup error naming the carrier and service if no exact match
/// exists, or any transport error from the listing call.
pub async fn resolve_service<G: RemoteGateway>(
    gateway: &G,
    carrier_code: &str,
    name: &str,
) -> Result<String, ShipStationError> {
    gateway
        .list_services(carrier_code)
        .await?
        .into_iter()
        .find(|service| service.name == name)
        .map(|service| service.code)
        .ok_or_else(|| ShipStationError::UnknownService {
            carrier: carrier_code.to_string(),
            name: name.to_string(),
        })
}

/// Resolve a package display name within a carrier.
///
/// # Errors
///
/// Returns a lookup error naming the carrier and package if no exact match
/// exists, or any transport error from the listing call.
pub async fn resolve_package<G: RemoteGateway>(
    gateway: &G,
    carrier_code: &str,
    name: &str,
) -> Result<String, ShipStationError> {
    gateway
        .list_packages(carrier_code)
        .await?
        .into_iter()
        .find(|package| package.name == name)
        .map(|package| package.code)
        .ok_or_else(|| ShipStationError::UnknownPackage {
            carrier: carrier_code.to_string(),
            name: name.to_string(),
        })
}
