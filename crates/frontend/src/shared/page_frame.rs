//! PageFrame — root wrapper of a screen.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_order_details--detail"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust
//! use leptos::prelude::*;
//! use frontend::shared::page_frame::PageFrame;
//! use frontend::shared::page_standard::PAGE_CAT_DETAIL;
//!
//! #[component]
//! pub fn MyDetail() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a001_order_details--detail" category=PAGE_CAT_DETAIL>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper with the standard metadata.
///
/// - `detail` → `page page--detail`
/// - `prompt` → `page page--prompt`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_PROMPT => "page page--prompt",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
