use thiserror::Error;

/// Failure of one order details fetch.
///
/// `Display` is the text shown in the error panel, so the messages stay
/// in the language of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDetailsError {
    /// Non-2xx response
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// `success: false` envelope, or a body that is not the expected JSON
    #[error("{message}")]
    Api { message: String },

    /// Requested order id is absent from `result_map`
    #[error("未找到订单数据")]
    NotFound,

    /// Request never produced a response
    #[error("网络错误: {0}")]
    Network(String),
}

impl OrderDetailsError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            OrderDetailsError::Http { status: 500 }.to_string(),
            "HTTP error! status: 500"
        );
        assert_eq!(OrderDetailsError::api("订单已删除").to_string(), "订单已删除");
        assert_eq!(OrderDetailsError::NotFound.to_string(), "未找到订单数据");
    }
}
