use serde::{Deserialize, Serialize};

/// Atomic attribute of every upstream record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiField {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub source: String,
}

impl ApiField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Non-empty value, `None` for null or ""
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Display value of an optional attribute; absent, null and "" all become ""
pub fn field_text(field: Option<&ApiField>) -> &str {
    field.and_then(ApiField::text).unwrap_or("")
}
