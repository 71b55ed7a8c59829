use super::record::OrderData;
use crate::domain::common::api_field::field_text;
use crate::domain::common::transport::fetch_data;
use crate::domain::common::{HttpTransport, OrderDetailsError};
use crate::shared::field_mapping::FieldMapping;
use crate::shared::format::{format_currency, parse_int_prefix};
use serde::{Deserialize, Serialize};

pub const BASIC_INFO_FETCH_FAILED: &str = "获取订单基本信息失败";
pub const UNKNOWN_STATUS: &str = "未知状态";
pub const LOADING_STATUS: &str = "加载中...";

/// Header summary above the tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub order_number: String,
    pub status: String,
    pub amount: String,
}

impl BasicInfo {
    /// Shown while the first load is in flight
    pub fn placeholder(order_id: &str) -> Self {
        Self {
            order_number: order_id.to_string(),
            status: LOADING_STATUS.to_string(),
            amount: "$0".to_string(),
        }
    }
}

pub fn map_basic_info(order_id: &str, data: &OrderData) -> Result<BasicInfo, OrderDetailsError> {
    let record = data.record(order_id).ok_or(OrderDetailsError::NotFound)?;

    let order_number = match field_text(record.order_no.as_ref()) {
        "" => order_id,
        no => no,
    };
    let status = match field_text(record.public_sea_pool_status.as_ref()) {
        "" => UNKNOWN_STATUS,
        s => s,
    };
    let amount = parse_int_prefix(field_text(record.debitamount.as_ref())).unwrap_or(0.0);

    Ok(BasicInfo {
        order_number: order_number.to_string(),
        status: status.to_string(),
        amount: format_currency(amount),
    })
}

pub async fn fetch_basic_info<H>(
    transport: &H,
    mapping: &FieldMapping,
    order_id: &str,
) -> Result<BasicInfo, OrderDetailsError>
where
    H: HttpTransport + ?Sized,
{
    let result: Result<BasicInfo, OrderDetailsError> = async {
        let url = mapping.order.url_for(order_id);
        let data: OrderData = fetch_data(transport, &url, BASIC_INFO_FETCH_FAILED).await?;
        map_basic_info(order_id, &data)
    }
    .await;

    if let Err(e) = &result {
        log::error!("{}: {}", BASIC_INFO_FETCH_FAILED, e);
    }
    result
}
