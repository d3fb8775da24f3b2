//! Incremental-poll cursor round-tripped through the hub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First page number in ShipStation's pagination scheme.
pub const FIRST_PAGE: u32 = 1;

/// How far the hub has consumed the remote shipment history.
///
/// The cursor is owned entirely by the hub: it arrives in the `parameters`
/// of a `/get_shipments` request and the advanced value is echoed back in
/// the response. The endpoint itself keeps no state between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCursor {
    /// Shipments created at or before this instant have been delivered.
    pub since: DateTime<Utc>,
    /// Next remote page to fetch; reset to 1 whenever `since` advances.
    #[serde(default = "default_page")]
    pub page: u32,
}

const fn default_page() -> u32 {
    FIRST_PAGE
}

impl SyncCursor {
    /// Cursor positioned at `since`, first page.
    #[must_use]
    pub const fn new(since: DateTime<Utc>) -> Self {
        Self {
            since,
            page: FIRST_PAGE,
        }
    }

    /// Same logical watermark, next page. Used when the remote API signals
    /// more pages remain for the current window.
    #[must_use]
    pub const fn next_page(self) -> Self {
        Self {
            since: self.since,
            page: self.page + 1,
        }
    }

    /// Watermark advanced to `now`, page reset. Used once the current
    /// window is fully drained.
    #[must_use]
    pub const fn advanced_to(now: DateTime<Utc>) -> Self {
        Self::new(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid rfc3339 timestamp")
    }

    #[test]
    fn test_page_defaults_to_first() {
        let cursor: SyncCursor =
            serde_json::from_str(r#"{"since": "2014-11-29T00:38:23Z"}"#).expect("serde");
        assert_eq!(cursor.page, FIRST_PAGE);
    }

    #[test]
    fn test_next_page_keeps_watermark() {
        let cursor = SyncCursor::new(at("2014-11-29T00:38:23Z"));
        let next = cursor.next_page();
        assert_eq!(next.since, cursor.since);
        assert_eq!(next.page, 2);
    }

    #[test]
    fn test_advanced_to_resets_page() {
        let cursor = SyncCursor::new(at("2014-11-29T00:38:23Z")).next_page();
        let advanced = SyncCursor::advanced_to(at("2014-12-01T09:00:00Z"));
        assert!(advanced.since > cursor.since);
        assert_eq!(advanced.page, FIRST_PAGE);
    }

    #[test]
    fn test_round_trips_through_json() {
        let cursor = SyncCursor {
            since: at("2014-11-29T00:38:23Z"),
            page: 3,
        };
        let json = serde_json::to_string(&cursor).expect("serde");
        let back: SyncCursor = serde_json::from_str(&json).expect("serde");
        assert_eq!(back, cursor);
    }
}
