pub mod api_field;
pub mod envelope;
pub mod error;
pub mod transport;

pub use api_field::ApiField;
pub use envelope::ApiEnvelope;
pub use error::OrderDetailsError;
pub use transport::{HttpResponse, HttpTransport};
