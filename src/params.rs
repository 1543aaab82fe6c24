//! Ordered query parameters
//!
//! Query parameters are held as an ordered list of `(name, value)` pairs
//! rather than a map: the emission order determines the literal query string
//! sent on the wire, and duplicate names are legal.

/// An ordered sequence of query parameter `(name, value)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedParams {
    pairs: Vec<(String, String)>,
}

impl OrderedParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, preserving insertion order
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Append all parameters from another list, preserving their order
    pub fn extend(&mut self, other: OrderedParams) {
        self.pairs.extend(other.pairs);
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in order
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.pairs.iter()
    }

    /// View the pairs as a slice
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Render the literal query string: `name=value` pairs joined with `&`.
    ///
    /// No percent-encoding is applied here; encoding, if any, happens in the
    /// transport layer once path variables have also been substituted.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<'a> IntoIterator for &'a OrderedParams {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for OrderedParams {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}
