//! Main page component for order details (MVVM Standard)

use super::tabs::{InfoTab, SubOrdersTab};
use super::view_model::{OrderDetailsVm, SAMPLE_ORDER_ID, TAB_INFO, TAB_SUB_ORDERS};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DETAIL, PAGE_CAT_PROMPT};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetail(order_id: Option<String>) -> impl IntoView {
    let vm = OrderDetailsVm::new(order_id);
    vm.load();

    let needs_order_id = vm.needs_order_id();

    view! {
        <Show
            when=move || !needs_order_id.get()
            fallback=move || view! { <NoOrderId vm=vm /> }
        >
            <PageFrame page_id="a001_order_details--detail" category=PAGE_CAT_DETAIL>
                <Header />
                <SummaryCard vm=vm />
                <TabBar vm=vm />
                <div class="page__content">
                    {move || match vm.active_tab.get() {
                        TAB_SUB_ORDERS => view! { <SubOrdersTab vm=vm /> }.into_any(),
                        _ => view! { <InfoTab vm=vm /> }.into_any(),
                    }}
                </div>
            </PageFrame>
        </Show>
    }
}

// ── Header ────────────────────────────────────────────────────────────────────

#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="page__header">
            <h1 class="page__title">"订单详情"</h1>
        </div>
    }
}

// ── Basic info ────────────────────────────────────────────────────────────────

#[component]
fn SummaryCard(vm: OrderDetailsVm) -> impl IntoView {
    let info = vm.basic_info;

    view! {
        <Card class="order-summary">
            <Flex gap=FlexGap::Medium style="align-items: center;">
                <span class="order-summary__icon">{icon("cart")}</span>
                <div class="order-summary__info">
                    <div class="order-summary__number">{move || info.get().order_number}</div>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || info.get().status}
                    </Badge>
                </div>
                <strong class="order-summary__amount">{move || info.get().amount}</strong>
            </Flex>
        </Card>
    }
}

// ── Tab bar ───────────────────────────────────────────────────────────────────

#[component]
fn TabBar(vm: OrderDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let sub_order_count = vm.sub_order_count();

    view! {
        <div class="page__tabs">
            <button
                class="page__tab"
                class:page__tab--active=move || active_tab.get() == TAB_INFO
                on:click=move |_| vm.set_tab(TAB_INFO)
            >
                {icon("file-text")} "订单信息"
            </button>

            <button
                class="page__tab"
                class:page__tab--active=move || active_tab.get() == TAB_SUB_ORDERS
                on:click=move |_| vm.set_tab(TAB_SUB_ORDERS)
            >
                {icon("list")} {move || format!("子订单列表 ({})", sub_order_count.get())}
            </button>
        </div>
    }
}

// ── No order id ───────────────────────────────────────────────────────────────

#[component]
fn NoOrderId(vm: OrderDetailsVm) -> impl IntoView {
    view! {
        <PageFrame page_id="a001_order_details--prompt" category=PAGE_CAT_PROMPT>
            <Header />
            <div class="page__content order-prompt">
                <p class="order-prompt__title">"请输入订单ID"</p>
                <p class="order-prompt__hint">{format!("例如: {}", SAMPLE_ORDER_ID)}</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.open(SAMPLE_ORDER_ID)
                >
                    {format!("使用测试订单ID ({})", SAMPLE_ORDER_ID)}
                </Button>
            </div>
        </PageFrame>
    }
}
