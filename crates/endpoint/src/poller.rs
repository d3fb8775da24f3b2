//! Incremental shipment polling.
//!
//! ShipStation only filters shipment listings at calendar-day granularity,
//! and it reports every timestamp in its own fixed clock (UTC-8) regardless
//! of the caller's zone. The poller therefore queries a whole remote day,
//! then filters precisely on the client side against the hub's watermark.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use shipstation_endpoint_core::{ShipmentStatus, ShipmentUpdate, SyncCursor};

use crate::mapping::address;
use crate::shipstation::{RemoteGateway, ShipStationError, ShipmentQuery};

/// ShipStation's fixed reporting offset from UTC.
const REMOTE_UTC_OFFSET_HOURS: i32 = -8;

/// Shipments fetched per remote page.
const PAGE_SIZE: u32 = 100;

/// Result of one poll pass.
#[derive(Debug)]
pub struct PollOutcome {
    /// Shipped-order notifications for the hub, one per retained shipment.
    pub updates: Vec<ShipmentUpdate>,
    /// Cursor to echo back: next page of the same window when `has_more`,
    /// otherwise the watermark advanced to the processing time.
    pub cursor: SyncCursor,
    /// More remote pages remain; the hub should call again immediately.
    pub has_more: bool,
}

/// Poll ShipStation for shipments created since the cursor's watermark.
///
/// `now` is the processing time the watermark advances to once the window
/// is drained; the caller passes it in so polling stays deterministic under
/// test.
///
/// Zero retained shipments is success, not an error, and the cursor still
/// advances.
///
/// # Errors
///
/// Returns any transport/API error from the shipment listing or from order
/// lookups for records that lack an order number.
pub async fn poll<G: RemoteGateway>(
    gateway: &G,
    cursor: SyncCursor,
    now: DateTime<Utc>,
) -> Result<PollOutcome, ShipStationError> {
    // Day-granular lower bound, in the remote clock. Rounding down means
    // re-reading part of an already-delivered day; the timestamp filter
    // below drops those again.
    let query_date = cursor.since.with_timezone(&remote_offset()).date_naive();
    let query = ShipmentQuery {
        create_date_start: query_date.format("%Y-%m-%d").to_string(),
        page: cursor.page,
        page_size: PAGE_SIZE,
    };
    let page = gateway.list_shipments(&query).await?;

    let mut updates = Vec::new();
    for record in &page.shipments {
        let Some(created_at) = record
            .create_date
            .as_deref()
            .and_then(parse_remote_timestamp)
        else {
            tracing::debug!(
                shipment_id = record.shipment_id,
                "skipping shipment without a parseable create date"
            );
            continue;
        };
        // The server-side filter is only day-granular; enforce the precise
        // watermark here. Strictly greater: the watermark instant itself
        // was delivered by the previous poll.
        if created_at <= cursor.since {
            continue;
        }

        // Early API generations return shipments without the hub's order
        // number (or address); the owning order still has both.
        let (id, order_ship_to) = match &record.order_number {
            Some(number) => (number.clone(), None),
            None => {
                let order = gateway.get_order(record.order_id).await?;
                (order.order_number, order.ship_to)
            }
        };
        let shipping_address = record
            .ship_to
            .as_ref()
            .or(order_ship_to.as_ref())
            .map(address::from_remote);

        updates.push(ShipmentUpdate {
            id,
            shipstation_id: record.shipment_id.to_string(),
            tracking: record.tracking_number.clone(),
            status: ShipmentStatus::Shipped,
            shipped_at: record.ship_date.as_deref().and_then(parse_remote_timestamp),
            shipping_address,
        });
    }

    let has_more = page.pages > page.page;
    let next_cursor = if has_more {
        cursor.next_page()
    } else {
        SyncCursor::advanced_to(now)
    };

    Ok(PollOutcome {
        updates,
        cursor: next_cursor,
        has_more,
    })
}

fn remote_offset() -> FixedOffset {
    FixedOffset::east_opt(REMOTE_UTC_OFFSET_HOURS * 3600).expect("static offset is in range")
}

/// Parse a remote timestamp string and pin it to ShipStation's clock.
///
/// The wire format drifted across API generations: full naive timestamps
/// with or without fractional seconds, `T` or space separated, and bare
/// dates (which read as midnight).
fn parse_remote_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    remote_offset()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
