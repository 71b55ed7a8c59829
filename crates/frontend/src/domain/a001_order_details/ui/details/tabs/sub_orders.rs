//! Sub-order list tab

use super::super::view_model::OrderDetailsVm;
use super::status::{ErrorPanel, LoadingPanel};
use contracts::domain::a002_sub_order::SubOrderCard;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SubOrdersTab(vm: OrderDetailsVm) -> impl IntoView {
    view! {
        {move || {
            if vm.loading.get() {
                return view! { <LoadingPanel text="加载子订单信息中..." /> }.into_any();
            }
            if let Some(err) = vm.error.get() {
                return view! { <ErrorPanel vm=vm message=err /> }.into_any();
            }

            view! {
                <div class="sub-orders">
                    {vm.cards.get().into_iter().map(|card| view! { <SubOrderCardView card=card /> }).collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn SubOrderCardView(card: SubOrderCard) -> impl IntoView {
    view! {
        <Card class="sub-order-card">
            <h4 class="details-section__title">{card.name}</h4>
            <DetailRow label="单价" value=card.unit_price />
            {card
                .sizes
                .into_iter()
                .map(|s| view! { <DetailRow label=s.size value=s.quantity /> })
                .collect_view()}
            <DetailRow label="总箱数" value=card.total_quantity />
            <div class="detail-row">
                <span class="detail-row__label">"总金额"</span>
                <strong class="detail-row__value detail-row__value--amount">{card.total_amount}</strong>
            </div>
            <DetailRow label="完货时间" value=card.completion_date />
        </Card>
    }
}

#[component]
fn DetailRow(#[prop(into)] label: String, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}
