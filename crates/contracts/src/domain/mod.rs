pub mod a001_order;
pub mod a002_sub_order;
pub mod a003_order_details;
pub mod common;
