pub mod loader;

pub use loader::{load_order_details, OrderDetails};
