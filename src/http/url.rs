//! Request URL building
//!
//! Combines a base authority, a relative path template and ordered query
//! parameters into a request URL string. Path-variable placeholders such as
//! `{channelId}` are left unexpanded by the builder; substitution (and any
//! percent-encoding) happens on the transport side via [`expand_path`].

use crate::params::OrderedParams;

/// Build a request URL from a base authority, path template and parameters.
///
/// The path template's placeholders are left unexpanded. Query parameters are
/// appended in input order with `&` separators and no percent-encoding;
/// duplicate names are preserved as separate `name=value` occurrences.
pub fn build_request_url(base_url: &str, path_template: &str, params: &OrderedParams) -> String {
    let base = base_url.trim_end_matches('/');
    let path = if path_template.starts_with('/') {
        path_template.to_string()
    } else {
        format!("/{path_template}")
    };

    if params.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{}", params.to_query_string())
    }
}

/// Substitute `{name}` placeholders in a URL or path template.
///
/// Unmatched placeholders are left intact so a missing variable shows up
/// verbatim in logs and error messages.
pub fn expand_path(template: &str, vars: &[(&str, &str)]) -> String {
    let mut expanded = template.to_string();
    for (name, value) in vars {
        expanded = expanded.replace(&format!("{{{name}}}"), value);
    }
    expanded
}
