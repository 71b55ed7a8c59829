//! Launch parameters read from the page URL.
//!
//! The host application opens the screen as `...?order_id=IN25001101`.

use url::form_urlencoded;

pub const ORDER_ID_PARAM: &str = "order_id";

/// Value of `name` in a `?a=1&b=2` query string; empty values count as absent.
///
/// The first occurrence wins; unrelated keys of any shape are ignored.
pub fn parse_query_param(search: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|v| !v.is_empty())
}

/// Query parameter of the current window location
///
/// # Returns
/// - `None` outside a browser or when the parameter is missing
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query_param(&search, name)
}

pub fn order_id_from_url() -> Option<String> {
    query_param(ORDER_ID_PARAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_id() {
        assert_eq!(
            parse_query_param("?order_id=IN25001101", ORDER_ID_PARAM),
            Some("IN25001101".to_string())
        );
        assert_eq!(
            parse_query_param("lang=zh&order_id=IN7", ORDER_ID_PARAM),
            Some("IN7".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_order_id() {
        assert_eq!(parse_query_param("", ORDER_ID_PARAM), None);
        assert_eq!(parse_query_param("?lang=zh", ORDER_ID_PARAM), None);
        assert_eq!(parse_query_param("?order_id=", ORDER_ID_PARAM), None);
    }

    #[test]
    fn test_order_id_next_to_bracketed_params() {
        assert_eq!(
            parse_query_param("?order_id=IN1&tags[]=a", ORDER_ID_PARAM),
            Some("IN1".to_string())
        );
        assert_eq!(
            parse_query_param("?from=app&ref[src]=x&order_id=IN1", ORDER_ID_PARAM),
            Some("IN1".to_string())
        );
    }

    #[test]
    fn test_repeated_order_id_takes_first() {
        assert_eq!(
            parse_query_param("?order_id=IN1&order_id=IN2", ORDER_ID_PARAM),
            Some("IN1".to_string())
        );
    }

    #[test]
    fn test_percent_encoded_order_id() {
        assert_eq!(
            parse_query_param("?order_id=IN%2025", ORDER_ID_PARAM),
            Some("IN 25".to_string())
        );
    }
}
