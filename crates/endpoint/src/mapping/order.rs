//! Order assembly: one normalized shipment → one ShipStation order document.

use shipstation_endpoint_core::{NormalizedShipment, ShipmentStatus};

use crate::hub::HubParameters;
use crate::shipstation::{
    AdvancedOptions, OrderPayload, OrderStatusCode, RemoteGateway, ShipStationError,
};

use super::{address, codes, items};

/// Outcome of preparing an update.
#[derive(Debug)]
pub enum UpdateRequest {
    /// The shipment has already shipped; transmitting an update would feed
    /// the poller's own status change back into another update, forever.
    /// Nothing was sent to ShipStation.
    Skip,
    /// No order with this number exists remotely. Benign: reported to the
    /// hub as a successful "not found", never as a failure.
    NotFound,
    /// Upsert document ready to transmit, remote order key attached.
    Submit(Box<OrderPayload>),
}

/// Map the hub status onto ShipStation's order status codes.
///
/// Everything that isn't held or cancelled lands in `awaiting_shipment`;
/// `shipped` only ever flows the other way, out of the poller.
const fn map_status(status: ShipmentStatus) -> OrderStatusCode {
    match status {
        ShipmentStatus::Hold => OrderStatusCode::OnHold,
        ShipmentStatus::Cancelled => OrderStatusCode::Cancelled,
        ShipmentStatus::Open | ShipmentStatus::Shipped => OrderStatusCode::AwaitingShipment,
    }
}

/// Build the order-creation document for a normalized shipment.
///
/// Carrier/service/package codes are resolved against the remote API only
/// when a carrier name is present and no `requested_shipping_service`
/// override is supplied; the override passes through verbatim instead.
/// Optional money/gift/compliance fields stay out of the payload when the
/// input doesn't carry them, and the billing address falls back to the
/// shipping address.
///
/// # Errors
///
/// Returns a validation error for a missing/incomplete shipping address, a
/// lookup error for an unresolvable carrier/service/package name, or any
/// transport error from the resolution calls.
pub async fn build_create_request<G: RemoteGateway>(
    shipment: &NormalizedShipment,
    params: &HubParameters,
    gateway: &G,
) -> Result<OrderPayload, ShipStationError> {
    let shipping = shipment
        .shipping_address
        .as_ref()
        .ok_or_else(|| ShipStationError::MissingField("shipping_address".to_string()))?;
    let ship_to = address::to_remote(shipping)?;
    let bill_to = match &shipment.billing_address {
        Some(billing) => address::to_remote(billing)?,
        None => ship_to.clone(),
    };

    let (carrier_code, service_code, package_code) =
        resolve_codes(shipment, gateway).await?;

    let order_status = map_status(shipment.status);
    let hold_until_date = match shipment.status {
        ShipmentStatus::Hold => shipment.hold_until.map(|ts| ts.date_naive()),
        _ => None,
    };

    let totals = shipment.totals.unwrap_or_default();

    let advanced = AdvancedOptions {
        store_id: params.shipstation_store_id,
        custom_field_1: shipment.custom_field_1.clone(),
        custom_field_2: shipment.custom_field_2.clone(),
        custom_field_3: shipment.custom_field_3.clone(),
        contains_alcohol: shipment.contains_alcohol,
        saturday_delivery: shipment.saturday_delivery,
        non_machinable: shipment.non_machinable,
    };

    Ok(OrderPayload {
        order_number: shipment.id.clone(),
        order_key: None,
        order_date: shipment.created_at,
        payment_date: shipment.created_at,
        order_status,
        customer_email: shipment.email.clone(),
        customer_notes: shipment.delivery_instructions.clone(),
        bill_to,
        ship_to,
        items: items::to_remote(&shipment.items),
        order_total: totals.order,
        amount_paid: totals.payment,
        tax_amount: totals.tax,
        shipping_amount: totals.shipping,
        gift: shipment.gift,
        gift_message: shipment.gift_message.clone(),
        requested_shipping_service: shipment.requested_shipping_service.clone(),
        carrier_code,
        service_code,
        package_code,
        confirmation: shipment.confirmation.clone(),
        hold_until_date,
        advanced_options: (!advanced.is_empty()).then_some(advanced),
    })
}

/// Build the order-update document, or decide not to.
///
/// Fails fast with [`UpdateRequest::Skip`] - before any remote call - when
/// the input status is `shipped`. Otherwise locates the existing remote
/// order by number; a miss is the benign [`UpdateRequest::NotFound`]. On a
/// hit, the create document is built as usual and the remote order key is
/// attached so ShipStation treats the transmission as an upsert.
///
/// # Errors
///
/// Same failure modes as [`build_create_request`], plus transport errors
/// from the order lookup.
pub async fn build_update_request<G: RemoteGateway>(
    shipment: &NormalizedShipment,
    params: &HubParameters,
    gateway: &G,
) -> Result<UpdateRequest, ShipStationError> {
    if shipment.status == ShipmentStatus::Shipped {
        return Ok(UpdateRequest::Skip);
    }

    let Some(existing) = gateway.find_order(&shipment.id).await? else {
        return Ok(UpdateRequest::NotFound);
    };

    let mut payload = build_create_request(shipment, params, gateway).await?;
    payload.order_key = existing.order_key;
    Ok(UpdateRequest::Submit(Box::new(payload)))
}

async fn resolve_codes<G: RemoteGateway>(
    shipment: &NormalizedShipment,
    gateway: &G,
) -> Result<(Option<String>, Option<String>, Option<String>), ShipStationError> {
    // An explicit requested service short-circuits resolution entirely.
    if shipment.requested_shipping_service.is_some() {
        return Ok((None, None, None));
    }
    let Some(carrier_name) = &shipment.shipping_carrier else {
        return Ok((None, None, None));
    };

    let carrier_code = codes::resolve_carrier(gateway, carrier_name).await?;
    let service_code = match &shipment.shipping_method {
        Some(method) => Some(codes::resolve_service(gateway, &carrier_code, method).await?),
        None => None,
    };
    let package_code = match &shipment.package {
        Some(package) => Some(codes::resolve_package(gateway, &carrier_code, package).await?),
        None => None,
    };

    Ok((Some(carrier_code), service_code, package_code))
}
