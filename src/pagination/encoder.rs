//! Pagination parameter encoding

use super::types::{PageCriteria, CURSOR_PARAM};
use crate::params::OrderedParams;

/// Query parameter carrying the requested page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Encode pagination criteria as ordered query parameters.
///
/// `None` criteria encode to an empty list. When present, the cursor is
/// emitted strictly before the page size; the filter encoders and their tests
/// rely on this fixed order.
pub fn page_params(criteria: Option<&PageCriteria>) -> OrderedParams {
    let mut params = OrderedParams::new();
    let Some(criteria) = criteria else {
        return params;
    };

    if let Some(next_page) = criteria.next_page() {
        params.push(CURSOR_PARAM, next_page.cursor());
    }
    if let Some(page_size) = criteria.page_size() {
        params.push(PAGE_SIZE_PARAM, page_size.to_string());
    }

    params
}
