//! Loading and error panels shared by both tabs

use super::super::view_model::OrderDetailsVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingPanel(text: &'static str) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
            <Spinner />
            <span>{text}</span>
        </Flex>
    }
}

#[component]
pub fn ErrorPanel(vm: OrderDetailsVm, message: String) -> impl IntoView {
    view! {
        <div class="order-error">
            <div style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error);">
                {format!("加载失败: {}", message)}
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.load()
                attr:style="margin-top: var(--spacing-md);"
            >
                {icon("refresh")} "重试"
            </Button>
        </div>
    }
}
