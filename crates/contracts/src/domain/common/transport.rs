use super::envelope::ApiEnvelope;
use super::error::OrderDetailsError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Plain GET client. Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, OrderDetailsError>;
}

/// GET `url` and unwrap the `{success, error_msg, data}` envelope
pub async fn fetch_data<T, H>(transport: &H, url: &str, fallback: &str) -> Result<T, OrderDetailsError>
where
    T: DeserializeOwned,
    H: HttpTransport + ?Sized,
{
    let response = transport.get(url).await?;
    if !response.is_success() {
        return Err(OrderDetailsError::Http {
            status: response.status,
        });
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| OrderDetailsError::api(format!("{}: {}", fallback, e)))?;
    envelope.into_data(fallback)
}
