//! Order info rows.
//!
//! Each logical key of the mapping table's order section is resolved
//! through a fixed source table. Rows whose value resolves to "" are
//! dropped, not rendered blank.

use super::display::DisplayRow;
use super::record::{OrderData, OrderRecord};
use crate::domain::common::api_field::field_text;
use crate::domain::common::transport::fetch_data;
use crate::domain::common::{ApiField, HttpTransport, OrderDetailsError};
use crate::shared::field_mapping::{EntitySection, FieldMapping};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const ORDER_FETCH_FAILED: &str = "获取订单数据失败";

/// Where a logical order key takes its value from
#[derive(Clone, Copy)]
pub enum FieldSource {
    Attribute(fn(&OrderRecord) -> Option<&ApiField>),
    /// Known key with no upstream attribute yet; always ""
    Unmapped,
}

static ORDER_FIELD_SOURCES: Lazy<HashMap<&'static str, FieldSource>> = Lazy::new(|| {
    use FieldSource::*;
    HashMap::from([
        ("projectId", Attribute(|r| r.order_no.as_ref())),
        ("custShortName", Attribute(|r| r.cust_short_name.as_ref())),
        ("responsibleSales", Attribute(|r| r.salesperson.as_ref())),
        ("orderCountry", Attribute(|r| r.country.as_ref())),
        ("factory", Attribute(|r| r.delivery_factory.as_ref())),
        // upstream has no signing country attribute; stays empty until one is defined
        ("signingCountry", Unmapped),
        ("containerQuantity", Attribute(|r| r.quantity_on_hand.as_ref())),
        ("crd", Attribute(|r| r.cust_request_date.as_ref())),
        ("deliveryData", Attribute(|r| r.delivery_date.as_ref())),
        ("etd", Attribute(|r| r.etd.as_ref())),
        ("eta", Attribute(|r| r.eta.as_ref())),
    ])
});

pub fn field_source(key: &str) -> Option<FieldSource> {
    ORDER_FIELD_SOURCES.get(key).copied()
}

/// Value of a logical key; unknown and unmapped keys give ""
pub fn resolve_field<'a>(record: &'a OrderRecord, key: &str) -> &'a str {
    match field_source(key) {
        Some(FieldSource::Attribute(extract)) => field_text(extract(record)),
        Some(FieldSource::Unmapped) | None => "",
    }
}

/// Rows in mapping table order, empty values skipped
pub fn map_order_rows(record: &OrderRecord, section: &EntitySection) -> Vec<DisplayRow> {
    section
        .fields
        .iter()
        .filter_map(|(key, spec)| {
            let value = resolve_field(record, key);
            (!value.is_empty()).then(|| DisplayRow {
                label: spec.label.clone(),
                value: value.to_string(),
                is_link: spec.is_link,
            })
        })
        .collect()
}

pub fn map_order(
    order_id: &str,
    data: &OrderData,
    section: &EntitySection,
) -> Result<Vec<DisplayRow>, OrderDetailsError> {
    let record = data.record(order_id).ok_or(OrderDetailsError::NotFound)?;
    Ok(map_order_rows(record, section))
}

/// GET the order endpoint and map the record to info rows
pub async fn fetch_order_rows<H>(
    transport: &H,
    mapping: &FieldMapping,
    order_id: &str,
) -> Result<Vec<DisplayRow>, OrderDetailsError>
where
    H: HttpTransport + ?Sized,
{
    let result: Result<Vec<DisplayRow>, OrderDetailsError> = async {
        let url = mapping.order.url_for(order_id);
        let data: OrderData = fetch_data(transport, &url, ORDER_FETCH_FAILED).await?;
        map_order(order_id, &data, &mapping.order)
    }
    .await;

    if let Err(e) = &result {
        log::error!("{}: {}", ORDER_FETCH_FAILED, e);
    }
    result
}
