//! Pagination types
//!
//! A page of resources may carry a `rel="next"` hyperlink whose URL embeds an
//! opaque cursor; the cursor is extracted here and resubmitted verbatim on the
//! following request.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Link relation marking a next-page hyperlink
pub const NEXT_REL: &str = "next";

/// Query parameter carrying the page cursor, matched case-insensitively
pub const CURSOR_PARAM: &str = "cursor";

/// A typed hyperlink between resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Link relation (e.g. "next")
    pub rel: String,
    /// Optional human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// Create a link without a title
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            title: None,
        }
    }

    /// Check if this is a next-page link
    pub fn is_next(&self) -> bool {
        self.rel == NEXT_REL
    }
}

/// Find the next-page link among a page's links
pub fn find_next_link(links: &[Link]) -> Option<&Link> {
    links.iter().find(|link| link.is_next())
}

/// An opaque next-page cursor derived from a `rel="next"` link.
///
/// Holds the original link URL and the raw cursor value captured from its
/// query string. The cursor is an opaque server-issued token and is never
/// URL-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPageCursor {
    url: String,
    cursor: String,
}

impl NextPageCursor {
    /// Parse a next-page link, validating its URL and extracting the cursor.
    ///
    /// Fails with `InvalidPageLink` if the href is not a valid URL, if its
    /// scheme is not http/https, or if no cursor parameter is present. The
    /// cursor parameter may appear anywhere in the query string and its name
    /// is matched case-insensitively; the captured value is the raw text
    /// between `=` and the next `&` or end of string.
    pub fn parse(link: &Link) -> Result<Self> {
        let url = Url::parse(&link.href).map_err(|e| {
            Error::invalid_page_link(format!("'{}' is not a valid URL: {e}", link.href))
        })?;

        // Url lowercases the scheme during parsing, so this comparison is
        // effectively case-insensitive.
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::invalid_page_link(format!(
                    "unsupported scheme '{other}' in '{}'; expected http or https",
                    link.href
                )))
            }
        }

        let cursor = extract_cursor(url.query().unwrap_or("")).ok_or_else(|| {
            Error::invalid_page_link(format!(
                "no '{CURSOR_PARAM}' query parameter in '{}'",
                link.href
            ))
        })?;

        Ok(Self {
            url: link.href.clone(),
            cursor,
        })
    }

    /// The original link URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The extracted opaque cursor value
    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

/// Scan a raw query string for the cursor parameter.
///
/// Works on the raw (undecoded) query text so the captured cursor is exactly
/// the substring the server issued.
fn extract_cursor(query: &str) -> Option<String> {
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name.eq_ignore_ascii_case(CURSOR_PARAM) {
            return Some(value.to_string());
        }
    }
    None
}

/// Validated, immutable pagination criteria for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCriteria {
    page_size: Option<u32>,
    next_page: Option<NextPageCursor>,
}

impl PageCriteria {
    /// Criteria with an explicit page size only
    pub fn with_size(page_size: u32) -> Result<Self> {
        Ok(Self {
            page_size: Some(validate_page_size(page_size)?),
            next_page: None,
        })
    }

    /// Criteria from a next-page link only (server default page size)
    pub fn with_next_page(link: &Link) -> Result<Self> {
        Ok(Self {
            page_size: None,
            next_page: Some(NextPageCursor::parse(link)?),
        })
    }

    /// Criteria with both a page size and a next-page link
    pub fn new(page_size: u32, link: &Link) -> Result<Self> {
        Ok(Self {
            page_size: Some(validate_page_size(page_size)?),
            next_page: Some(NextPageCursor::parse(link)?),
        })
    }

    /// The requested page size, if any
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// The validated next-page cursor, if any
    pub fn next_page(&self) -> Option<&NextPageCursor> {
        self.next_page.as_ref()
    }
}

fn validate_page_size(page_size: u32) -> Result<u32> {
    if page_size == 0 {
        return Err(Error::invalid_argument(
            "page size must be greater than zero",
        ));
    }
    Ok(page_size)
}
