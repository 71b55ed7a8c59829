//! Tab components for order details

mod info;
mod status;
mod sub_orders;

pub use info::InfoTab;
pub use sub_orders::SubOrdersTab;
