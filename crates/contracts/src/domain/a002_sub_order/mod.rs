pub mod card;
pub mod mapper;
pub mod record;

pub use card::{SizeBucket, SizeQuantity, SubOrderCard};
pub use mapper::{fetch_sub_order_cards, map_sub_order, map_sub_orders};
pub use record::{SubOrderData, SubOrderRecord};
