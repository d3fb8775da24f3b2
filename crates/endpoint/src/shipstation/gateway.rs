//! Remote gateway capability trait.
//!
//! The ShipStation API has been fronted three different ways over its life
//! (OData resources, a third-party REST gateway, the public REST API). The
//! order assembler and shipment poller are written once against this trait;
//! swapping the API generation means swapping the implementation, and tests
//! substitute an in-memory one.

use tracing::instrument;

use super::client::ShipStationClient;
use super::types::{
    Carrier, CarrierPackage, CarrierService, OrderList, OrderPayload, OrderRecord, ShipmentPage,
    ShipmentQuery,
};
use super::ShipStationError;

/// Capabilities this endpoint needs from the remote order/shipment service.
pub trait RemoteGateway {
    /// Create or update an order. ShipStation upserts on `orderKey`: a
    /// payload without a key creates, one with a key updates in place.
    async fn create_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderRecord, ShipStationError>;

    /// Locate an order by its hub-assigned order number. `None` is the
    /// benign miss the update path reports as "not found".
    async fn find_order(
        &self,
        order_number: &str,
    ) -> Result<Option<OrderRecord>, ShipStationError>;

    /// Fetch one order by ShipStation's own identifier.
    async fn get_order(&self, order_id: i64) -> Result<OrderRecord, ShipStationError>;

    /// List shipments created on/after a day-granular lower bound.
    async fn list_shipments(
        &self,
        query: &ShipmentQuery,
    ) -> Result<ShipmentPage, ShipStationError>;

    async fn list_carriers(&self) -> Result<Vec<Carrier>, ShipStationError>;

    async fn list_services(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierService>, ShipStationError>;

    async fn list_packages(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierPackage>, ShipStationError>;
}

impl RemoteGateway for ShipStationClient {
    #[instrument(skip(self, payload), fields(order_number = %payload.order_number))]
    async fn create_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderRecord, ShipStationError> {
        self.post("/orders/createorder", payload).await
    }

    #[instrument(skip(self))]
    async fn find_order(
        &self,
        order_number: &str,
    ) -> Result<Option<OrderRecord>, ShipStationError> {
        // The orderNumber filter is a substring match on ShipStation's side;
        // only an exact hit counts as found.
        let list: OrderList = self
            .get("/orders", &[("orderNumber", order_number.to_string())])
            .await?;
        Ok(list
            .orders
            .into_iter()
            .find(|order| order.order_number == order_number))
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: i64) -> Result<OrderRecord, ShipStationError> {
        self.get(&format!("/orders/{order_id}"), &[]).await
    }

    #[instrument(skip(self), fields(page = query.page))]
    async fn list_shipments(
        &self,
        query: &ShipmentQuery,
    ) -> Result<ShipmentPage, ShipStationError> {
        self.get(
            "/shipments",
            &[
                ("createDateStart", query.create_date_start.clone()),
                ("page", query.page.to_string()),
                ("pageSize", query.page_size.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_carriers(&self) -> Result<Vec<Carrier>, ShipStationError> {
        self.get("/carriers", &[]).await
    }

    #[instrument(skip(self))]
    async fn list_services(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierService>, ShipStationError> {
        self.get(
            "/carriers/listservices",
            &[("carrierCode", carrier_code.to_string())],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_packages(
        &self,
        carrier_code: &str,
    ) -> Result<Vec<CarrierPackage>, ShipStationError> {
        self.get(
            "/carriers/listpackages",
            &[("carrierCode", carrier_code.to_string())],
        )
        .await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory gateway for mapper and poller tests.

    use std::sync::Mutex;

    use super::*;

    /// Scripted gateway: fixed datasets in, every call recorded.
    #[derive(Default)]
    pub struct MockGateway {
        pub carriers: Vec<Carrier>,
        pub services: Vec<CarrierService>,
        pub packages: Vec<CarrierPackage>,
        pub orders: Vec<OrderRecord>,
        /// One entry per remote page, in page order.
        pub shipment_pages: Vec<ShipmentPage>,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockGateway {
        pub fn record(&self, call: impl Into<String>) {
            self.calls
                .lock()
                .expect("mock call log poisoned")
                .push(call.into());
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().expect("mock call log poisoned").len()
        }
    }

    impl RemoteGateway for MockGateway {
        async fn create_order(
            &self,
            payload: &OrderPayload,
        ) -> Result<OrderRecord, ShipStationError> {
            self.record(format!("create_order:{}", payload.order_number));
            Ok(OrderRecord {
                order_id: 43_945_660,
                order_number: payload.order_number.clone(),
                order_key: payload
                    .order_key
                    .clone()
                    .or_else(|| Some("generated-key".to_string())),
                order_status: None,
                ship_to: Some(payload.ship_to.clone()),
            })
        }

        async fn find_order(
            &self,
            order_number: &str,
        ) -> Result<Option<OrderRecord>, ShipStationError> {
            self.record(format!("find_order:{order_number}"));
            Ok(self
                .orders
                .iter()
                .find(|order| order.order_number == order_number)
                .cloned())
        }

        async fn get_order(&self, order_id: i64) -> Result<OrderRecord, ShipStationError> {
            self.record(format!("get_order:{order_id}"));
            self.orders
                .iter()
                .find(|order| order.order_id == order_id)
                .cloned()
                .ok_or_else(|| ShipStationError::Api {
                    status: 404,
                    body: format!("{{\"message\": \"order {order_id} not found\"}}"),
                })
        }

        async fn list_shipments(
            &self,
            query: &ShipmentQuery,
        ) -> Result<ShipmentPage, ShipStationError> {
            self.record(format!("list_shipments:{}:{}", query.create_date_start, query.page));
            let index = query.page.saturating_sub(1) as usize;
            Ok(self.shipment_pages.get(index).cloned().unwrap_or(ShipmentPage {
                shipments: vec![],
                total: 0,
                page: query.page,
                pages: 0,
            }))
        }

        async fn list_carriers(&self) -> Result<Vec<Carrier>, ShipStationError> {
            self.record("list_carriers");
            Ok(self.carriers.clone())
        }

        async fn list_services(
            &self,
            carrier_code: &str,
        ) -> Result<Vec<CarrierService>, ShipStationError> {
            self.record(format!("list_services:{carrier_code}"));
            Ok(self.services.clone())
        }

        async fn list_packages(
            &self,
            carrier_code: &str,
        ) -> Result<Vec<CarrierPackage>, ShipStationError> {
            self.record(format!("list_packages:{carrier_code}"));
            Ok(self.packages.clone())
        }
    }
}
