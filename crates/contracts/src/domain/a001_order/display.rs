use serde::{Deserialize, Serialize};

/// One label/value line of the order info tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
    pub is_link: bool,
}
