use crate::domain::a001_order_details::ui::details::OrderDetail;
use crate::shared::url_params::order_id_from_url;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let order_id = order_id_from_url();
    log::info!("order details opened for {:?}", order_id);

    view! {
        <OrderDetail order_id=order_id />
    }
}
