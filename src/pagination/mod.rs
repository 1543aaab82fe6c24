//! Cursor-based pagination
//!
//! # Overview
//!
//! A resource collection response may include a `rel="next"` link whose URL
//! embeds an opaque cursor. [`NextPageCursor::parse`] re-derives that cursor
//! from the link, [`PageCriteria`] validates a pagination request, and
//! [`page_params`] encodes it into ordered query parameters for the next call.

mod encoder;
mod types;

pub use encoder::{page_params, PAGE_SIZE_PARAM};
pub use types::{find_next_link, Link, NextPageCursor, PageCriteria, CURSOR_PARAM, NEXT_REL};
