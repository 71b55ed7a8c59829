//! Order info tab

use super::super::view_model::OrderDetailsVm;
use super::status::{ErrorPanel, LoadingPanel};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InfoTab(vm: OrderDetailsVm) -> impl IntoView {
    view! {
        {move || {
            if vm.loading.get() {
                return view! { <LoadingPanel text="加载订单信息中..." /> }.into_any();
            }
            if let Some(err) = vm.error.get() {
                return view! { <ErrorPanel vm=vm message=err /> }.into_any();
            }

            let rows = vm.rows.get();
            view! {
                <Card class="details-card">
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="detail-row">
                                    <span class="detail-row__label">{row.label}</span>
                                    <span
                                        class="detail-row__value"
                                        class:detail-row__value--link=row.is_link
                                    >
                                        {row.value}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </Card>
            }
            .into_any()
        }}
    }
}
