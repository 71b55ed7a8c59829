//! One load cycle of the order details screen.
//!
//! The three fetches run concurrently on the caller's executor and are
//! joined with `try_join!`: the first error aborts the cycle and no
//! partial data is returned. A cycle owns no state, so a retry is just
//! another call.

use crate::domain::a001_order::{fetch_basic_info, fetch_order_rows, BasicInfo, DisplayRow};
use crate::domain::a002_sub_order::{fetch_sub_order_cards, SubOrderCard};
use crate::domain::common::{HttpTransport, OrderDetailsError};
use crate::shared::field_mapping::FieldMapping;
use serde::{Deserialize, Serialize};

/// Everything the screen renders for one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub rows: Vec<DisplayRow>,
    pub cards: Vec<SubOrderCard>,
    pub basic_info: BasicInfo,
}

pub async fn load_order_details<H>(
    transport: &H,
    mapping: &FieldMapping,
    order_id: &str,
) -> Result<OrderDetails, OrderDetailsError>
where
    H: HttpTransport + ?Sized,
{
    let (rows, cards, basic_info) = futures::try_join!(
        fetch_order_rows(transport, mapping, order_id),
        fetch_sub_order_cards(transport, mapping, order_id),
        fetch_basic_info(transport, mapping, order_id)
    )?;

    log::debug!(
        "order {} loaded: {} rows, {} sub-orders",
        order_id,
        rows.len(),
        cards.len()
    );

    Ok(OrderDetails {
        rows,
        cards,
        basic_info,
    })
}
