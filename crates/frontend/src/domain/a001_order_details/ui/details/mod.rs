//! Order details screen (MVVM): `model` talks HTTP, `view_model` holds
//! the signals, `page` and `tabs` render them.

mod model;
mod page;
mod tabs;
mod view_model;

pub use page::OrderDetail;
