//! Field mapping table: display metadata and endpoints per entity kind.
//!
//! The document is embedded at compile time and parsed once on first use.
//! Key order inside `fields` is the render order of the order info tab,
//! so the table keeps keys in document order instead of hashing them.

use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

const FIELD_MAPPING_JSON: &str = include_str!("../../config/field_mapping.json");

static GLOBAL: Lazy<FieldMapping> = Lazy::new(|| {
    FieldMapping::from_json(FIELD_MAPPING_JSON).unwrap_or_else(|e| {
        log::error!("field_mapping.json is invalid: {}", e);
        FieldMapping::default()
    })
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Order,
    SubOrder,
}

/// Display metadata of one logical field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    #[serde(default, rename = "isLink")]
    pub is_link: bool,
}

/// Ordered `key -> FieldSpec` list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable(Vec<(String, FieldSpec)>);

impl FieldTable {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for FieldTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = FieldTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field key to {label, isLink}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, FieldSpec)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, spec)) = map.next_entry::<String, FieldSpec>()? {
                    // a repeated key overrides the earlier spec but keeps its position
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = spec,
                        None => entries.push((key, spec)),
                    }
                }
                Ok(FieldTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntitySection {
    #[serde(default)]
    pub fields: FieldTable,
    #[serde(default)]
    pub request_url: String,
}

impl EntitySection {
    /// Label for `key`, "" when the key is not configured
    pub fn label(&self, key: &str) -> &str {
        self.fields.get(key).map(|s| s.label.as_str()).unwrap_or("")
    }

    pub fn is_link(&self, key: &str) -> bool {
        self.fields.get(key).map(|s| s.is_link).unwrap_or(false)
    }

    /// `request_url` with the order id appended as a path segment
    pub fn url_for(&self, order_id: &str) -> String {
        format!("{}{}", self.request_url, urlencoding::encode(order_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldMapping {
    pub order: EntitySection,
    #[serde(rename = "subOrder")]
    pub sub_order: EntitySection,
}

impl FieldMapping {
    /// Table embedded in the binary, parsed on first access
    pub fn global() -> &'static FieldMapping {
        &GLOBAL
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn section(&self, kind: EntityKind) -> &EntitySection {
        match kind {
            EntityKind::Order => &self.order,
            EntityKind::SubOrder => &self.sub_order,
        }
    }

    pub fn request_url(&self, kind: EntityKind, order_id: &str) -> String {
        self.section(kind).url_for(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_mapping_parses() {
        let mapping = FieldMapping::from_json(FIELD_MAPPING_JSON).unwrap();
        assert_eq!(mapping.order.fields.len(), 11);
        assert!(!mapping.order.request_url.is_empty());
        assert!(!mapping.sub_order.request_url.is_empty());
        assert_eq!(FieldMapping::global(), &mapping);
    }

    #[test]
    fn test_embedded_order_keys_in_document_order() {
        let keys: Vec<&str> = FieldMapping::global().order.fields.keys().collect();
        assert_eq!(
            keys,
            vec![
                "projectId",
                "custShortName",
                "responsibleSales",
                "orderCountry",
                "factory",
                "signingCountry",
                "containerQuantity",
                "crd",
                "deliveryData",
                "etd",
                "eta",
            ]
        );
    }

    #[test]
    fn test_keys_keep_document_order_not_alphabetical() {
        let json = r#"{
            "order": {"fields": {"zeta": {"label": "Z"}, "alpha": {"label": "A", "isLink": true}}, "request_url": "u/"},
            "subOrder": {"fields": {}, "request_url": "s/"}
        }"#;
        let mapping = FieldMapping::from_json(json).unwrap();
        let keys: Vec<&str> = mapping.order.fields.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert!(mapping.order.is_link("alpha"));
        assert!(!mapping.order.is_link("zeta"));
    }

    #[test]
    fn test_missing_key_has_empty_label() {
        let mapping = FieldMapping::global();
        assert_eq!(mapping.order.label("noSuchField"), "");
        assert!(!mapping.order.is_link("noSuchField"));
    }

    #[test]
    fn test_request_url_appends_order_id() {
        let json = r#"{
            "order": {"fields": {}, "request_url": "https://api.test/order/"},
            "subOrder": {"fields": {}, "request_url": "https://api.test/sub/"}
        }"#;
        let mapping = FieldMapping::from_json(json).unwrap();
        assert_eq!(
            mapping.request_url(EntityKind::Order, "IN25001101"),
            "https://api.test/order/IN25001101"
        );
        assert_eq!(
            mapping.request_url(EntityKind::SubOrder, "A B/1"),
            "https://api.test/sub/A%20B%2F1"
        );
    }
}
