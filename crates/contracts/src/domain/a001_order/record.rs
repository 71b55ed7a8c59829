use crate::domain::common::ApiField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `data` of the order endpoint: records keyed by order id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderData {
    pub result_map: HashMap<String, Option<OrderRecord>>,
}

impl OrderData {
    pub fn record(&self, order_id: &str) -> Option<&OrderRecord> {
        self.result_map.get(order_id).and_then(Option::as_ref)
    }
}

/// Raw order header as sent by upstream; every attribute may be missing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_no: Option<ApiField>,
    pub cust_short_name: Option<ApiField>,
    pub material_index: Option<ApiField>,
    pub debitamount: Option<ApiField>,
    pub income_name: Option<ApiField>,
    pub quantity_on_hand: Option<ApiField>,
    pub salesperson: Option<ApiField>,
    pub delivery_factory: Option<ApiField>,
    pub cust_request_date: Option<ApiField>,
    pub delivery_date: Option<ApiField>,
    pub box_or_not: Option<ApiField>,
    pub planned_start_time: Option<ApiField>,
    pub plan_end_time: Option<ApiField>,
    pub booking_status: Option<ApiField>,
    pub etd: Option<ApiField>,
    pub eta: Option<ApiField>,
    pub load_date: Option<ApiField>,
    pub need_shipment: Option<ApiField>,
    pub customer_code: Option<ApiField>,
    pub cust_name: Option<ApiField>,
    pub country: Option<ApiField>,
    pub public_sea: Option<ApiField>,
    pub public_sea_pool_status: Option<ApiField>,
    pub payment_period: Option<ApiField>,
    pub collection_agreement: Option<ApiField>,
    pub estimated_recovery_time: Option<ApiField>,
    pub is_draft: Option<ApiField>,
}
