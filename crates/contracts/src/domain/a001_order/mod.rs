pub mod basic_info;
pub mod display;
pub mod mapper;
pub mod record;

pub use basic_info::{fetch_basic_info, map_basic_info, BasicInfo};
pub use display::DisplayRow;
pub use mapper::{fetch_order_rows, map_order, map_order_rows};
pub use record::{OrderData, OrderRecord};
