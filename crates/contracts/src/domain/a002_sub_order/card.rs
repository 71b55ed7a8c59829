use super::record::SubOrderRecord;
use crate::domain::common::ApiField;
use serde::{Deserialize, Serialize};

/// Size buckets in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeBucket {
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 5] = [Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    pub fn label(self) -> &'static str {
        match self {
            Self::S => "S (箱数)",
            Self::M => "M (箱数)",
            Self::L => "L (箱数)",
            Self::Xl => "XL (箱数)",
            Self::Xxl => "XXL (箱数)",
        }
    }

    pub fn field(self, record: &SubOrderRecord) -> Option<&ApiField> {
        match self {
            Self::S => record.s_model_box_count.as_ref(),
            Self::M => record.m_model_box_count.as_ref(),
            Self::L => record.l_model_box_count.as_ref(),
            Self::Xl => record.xl_model_box_count.as_ref(),
            Self::Xxl => record.xxl_model_box_count.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeQuantity {
    pub size: String,
    pub quantity: String,
}

/// Display card of the sub-order tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubOrderCard {
    pub name: String,
    pub unit_price: String,
    pub sizes: Vec<SizeQuantity>,
    pub total_quantity: String,
    pub total_amount: String,
    pub completion_date: String,
}
