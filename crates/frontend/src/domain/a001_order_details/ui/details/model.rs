//! API layer for order details

use async_trait::async_trait;
use contracts::domain::a003_order_details::{load_order_details, OrderDetails};
use contracts::domain::common::{HttpResponse, HttpTransport, OrderDetailsError};
use contracts::shared::field_mapping::FieldMapping;
use gloo_net::http::Request;

/// Browser `fetch` through gloo-net
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, OrderDetailsError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| OrderDetailsError::Network(format!("Failed to fetch: {}", e)))?;

        let status = response.status();
        if !response.ok() {
            return Ok(HttpResponse {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OrderDetailsError::Network(format!("Failed to read response: {}", e)))?;
        Ok(HttpResponse { status, body })
    }
}

pub async fn fetch_order_details(order_id: &str) -> Result<OrderDetails, OrderDetailsError> {
    load_order_details(&GlooTransport, FieldMapping::global(), order_id).await
}
