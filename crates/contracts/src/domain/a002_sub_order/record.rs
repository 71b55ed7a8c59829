use crate::domain::common::ApiField;
use serde::{Deserialize, Serialize};

/// `data` of the sub-order endpoint, in upstream order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubOrderData {
    pub result_list: Vec<SubOrderRecord>,
}

/// One product line under an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubOrderRecord {
    pub order_no: Option<ApiField>,
    pub material_index: Option<ApiField>,
    pub model: Option<ApiField>,
    pub box_count: Option<ApiField>,
    /// Price per box; may carry a stray ':' (e.g. "12:34")
    pub box_price: Option<ApiField>,
    pub description: Option<ApiField>,
    pub s_model_box_count: Option<ApiField>,
    pub m_model_box_count: Option<ApiField>,
    pub l_model_box_count: Option<ApiField>,
    pub xl_model_box_count: Option<ApiField>,
    pub xxl_model_box_count: Option<ApiField>,
    pub total_box_count: Option<ApiField>,
    pub plan_end_time: Option<ApiField>,
}
