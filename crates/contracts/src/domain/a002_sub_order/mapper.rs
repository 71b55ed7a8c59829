//! Sub-order cards.
//!
//! The unit price keeps the upstream string (colon removed) while the
//! total is computed from parsed numbers. The two are intentionally not
//! derived from each other.

use super::card::{SizeBucket, SizeQuantity, SubOrderCard};
use super::record::{SubOrderData, SubOrderRecord};
use crate::domain::common::api_field::field_text;
use crate::domain::common::transport::fetch_data;
use crate::domain::common::{HttpTransport, OrderDetailsError};
use crate::shared::date_format::format_calendar_date;
use crate::shared::field_mapping::FieldMapping;
use crate::shared::format::{format_currency, parse_float_prefix, parse_int_prefix};

pub const SUB_ORDER_FETCH_FAILED: &str = "获取子订单数据失败";

/// Removes the first ':' of a price string, "12:34" -> "1234"
pub fn strip_colon(raw: &str) -> String {
    raw.replacen(':', "", 1)
}

/// Buckets with a non-empty raw count, S to XXL
pub fn collect_sizes(record: &SubOrderRecord) -> Vec<SizeQuantity> {
    SizeBucket::ALL
        .iter()
        .filter_map(|bucket| {
            let quantity = field_text(bucket.field(record));
            (!quantity.is_empty()).then(|| SizeQuantity {
                size: bucket.label().to_string(),
                quantity: quantity.to_string(),
            })
        })
        .collect()
}

/// boxPrice * totalBoxCount, unparseable parts count as 0
pub fn total_amount(record: &SubOrderRecord) -> f64 {
    let price = parse_float_prefix(&strip_colon(field_text(record.box_price.as_ref()))).unwrap_or(0.0);
    let boxes = parse_int_prefix(field_text(record.total_box_count.as_ref())).unwrap_or(0.0);
    price * boxes
}

pub fn map_sub_order(record: &SubOrderRecord) -> SubOrderCard {
    let unit_price = match field_text(record.box_price.as_ref()) {
        "" => "$0".to_string(),
        raw => format!("${}", strip_colon(raw)),
    };
    let total_quantity = match field_text(record.total_box_count.as_ref()) {
        "" => "0",
        raw => raw,
    };

    SubOrderCard {
        name: field_text(record.description.as_ref()).to_string(),
        unit_price,
        sizes: collect_sizes(record),
        total_quantity: total_quantity.to_string(),
        total_amount: format_currency(total_amount(record)),
        completion_date: format_calendar_date(record.plan_end_time.as_ref().and_then(|f| f.text())),
    }
}

pub fn map_sub_orders(data: &SubOrderData) -> Vec<SubOrderCard> {
    data.result_list.iter().map(map_sub_order).collect()
}

/// GET the sub-order endpoint and map every record, order preserved
pub async fn fetch_sub_order_cards<H>(
    transport: &H,
    mapping: &FieldMapping,
    order_id: &str,
) -> Result<Vec<SubOrderCard>, OrderDetailsError>
where
    H: HttpTransport + ?Sized,
{
    let url = mapping.sub_order.url_for(order_id);
    let result = fetch_data::<SubOrderData, _>(transport, &url, SUB_ORDER_FETCH_FAILED)
        .await
        .map(|data| map_sub_orders(&data));

    if let Err(e) = &result {
        log::error!("{}: {}", SUB_ORDER_FETCH_FAILED, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ApiField;

    fn record(fields: serde_json::Value) -> SubOrderRecord {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn test_colon_price_computation_and_display() {
        let r = record(serde_json::json!({
            "boxPrice": {"value": "12:34"},
            "totalBoxCount": {"value": "10"}
        }));
        let card = map_sub_order(&r);
        assert_eq!(card.total_amount, "$12,340");
        assert_eq!(card.unit_price, "$1234");
        assert_eq!(card.total_quantity, "10");
    }

    #[test]
    fn test_only_present_sizes_are_listed() {
        let r = record(serde_json::json!({ "sModelBoxCount": {"value": "5"} }));
        assert_eq!(
            collect_sizes(&r),
            vec![SizeQuantity {
                size: "S (箱数)".into(),
                quantity: "5".into()
            }]
        );
    }

    #[test]
    fn test_sizes_keep_bucket_order() {
        let mut r = record(serde_json::json!({
            "xxlModelBoxCount": {"value": "1"},
            "mModelBoxCount": {"value": "2"},
            "lModelBoxCount": {"value": ""},
            "xlModelBoxCount": {"value": null}
        }));
        r.s_model_box_count = Some(ApiField::new("0"));
        let sizes: Vec<String> = collect_sizes(&r).into_iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec!["S (箱数)", "M (箱数)", "XXL (箱数)"]);
    }

    #[test]
    fn test_empty_record_defaults() {
        let card = map_sub_order(&SubOrderRecord::default());
        assert_eq!(
            card,
            SubOrderCard {
                name: String::new(),
                unit_price: "$0".into(),
                sizes: vec![],
                total_quantity: "0".into(),
                total_amount: "$0".into(),
                completion_date: String::new(),
            }
        );
    }

    #[test]
    fn test_unparseable_numbers_degrade_to_zero() {
        let r = record(serde_json::json!({
            "boxPrice": {"value": "面议"},
            "totalBoxCount": {"value": "12"}
        }));
        let card = map_sub_order(&r);
        assert_eq!(card.unit_price, "$面议");
        assert_eq!(card.total_amount, "$0");

        let r = record(serde_json::json!({
            "boxPrice": {"value": "8.5"},
            "totalBoxCount": {"value": "many"}
        }));
        assert_eq!(map_sub_order(&r).total_amount, "$0");
    }

    #[test]
    fn test_box_count_beyond_i64_keeps_magnitude() {
        let r = record(serde_json::json!({
            "boxPrice": {"value": "1"},
            "totalBoxCount": {"value": "99999999999999999999"}
        }));
        assert_eq!(map_sub_order(&r).total_amount, "$100,000,000,000,000,000,000");
    }

    #[test]
    fn test_fractional_total() {
        let r = record(serde_json::json!({
            "boxPrice": {"value": "12.5"},
            "totalBoxCount": {"value": "3"}
        }));
        assert_eq!(map_sub_order(&r).total_amount, "$37.5");
    }

    #[test]
    fn test_completion_date_and_name() {
        let r = record(serde_json::json!({
            "description": {"value": "保温杯 500ml"},
            "planEndTime": {"value": "2025-06-30 00:00:00"}
        }));
        let card = map_sub_order(&r);
        assert_eq!(card.name, "保温杯 500ml");
        assert_eq!(card.completion_date, "2025/6/30");
    }

    #[test]
    fn test_list_order_is_preserved() {
        let data: SubOrderData = serde_json::from_value(serde_json::json!({
            "result_list": [
                {"description": {"value": "B"}},
                {"description": {"value": "A"}},
                {"description": {"value": "C"}}
            ]
        }))
        .unwrap();
        let names: Vec<String> = map_sub_orders(&data).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
