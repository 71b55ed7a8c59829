//! ViewModel for order details

use super::model::fetch_order_details;
use contracts::domain::a001_order::{BasicInfo, DisplayRow};
use contracts::domain::a002_sub_order::SubOrderCard;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const TAB_INFO: &str = "info";
pub const TAB_SUB_ORDERS: &str = "suborders";

/// Order id offered on the "no order id" prompt
pub const SAMPLE_ORDER_ID: &str = "IN25001101";

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub order_id: RwSignal<Option<String>>,
    pub rows: RwSignal<Vec<DisplayRow>>,
    pub cards: RwSignal<Vec<SubOrderCard>>,
    pub basic_info: RwSignal<BasicInfo>,

    pub active_tab: RwSignal<&'static str>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailsVm {
    pub fn new(order_id: Option<String>) -> Self {
        let basic_info = BasicInfo::placeholder(order_id.as_deref().unwrap_or_default());
        Self {
            order_id: RwSignal::new(order_id),
            rows: RwSignal::new(Vec::new()),
            cards: RwSignal::new(Vec::new()),
            basic_info: RwSignal::new(basic_info),

            active_tab: RwSignal::new(TAB_INFO),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn sub_order_count(&self) -> Signal<usize> {
        let cards = self.cards;
        Signal::derive(move || cards.with(Vec::len))
    }

    /// Nothing to show and nothing in flight
    pub fn needs_order_id(&self) -> Signal<bool> {
        let order_id = self.order_id;
        let loading = self.loading;
        Signal::derive(move || order_id.with(Option::is_none) && !loading.get())
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    pub fn open(&self, order_id: &str) {
        self.order_id.set(Some(order_id.to_string()));
        self.basic_info.set(BasicInfo::placeholder(order_id));
        self.load();
    }

    /// Runs a full load cycle; also the retry action.
    ///
    /// A retry does not cancel a cycle still in flight, whichever finishes
    /// last wins.
    pub fn load(&self) {
        let Some(id) = self.order_id.get_untracked() else {
            self.loading.set(false);
            return;
        };

        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match fetch_order_details(&id).await {
                Ok(details) => {
                    vm.rows.set(details.rows);
                    vm.cards.set(details.cards);
                    vm.basic_info.set(details.basic_info);
                }
                Err(e) => {
                    leptos::logging::log!("加载数据失败: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.loading.set(false);
        });
    }
}
