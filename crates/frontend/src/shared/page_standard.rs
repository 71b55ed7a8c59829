//! Page category constants.
//!
//! Every screen declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_order_details--detail"`) and `data-page-category` with one
//! of the constants below. The `--` separator makes the entity searchable:
//! copy the id from the DOM inspector and you land in `domain/{entity}/`.

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Input prompt shown before there is a record to display.
pub const PAGE_CAT_PROMPT: &str = "prompt";
