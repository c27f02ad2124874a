//! Query string helpers

/// Percent-decoded value of the first `name` pair in a query string
///
/// Repeated keys resolve to the first occurrence. A key without `=` yields
/// an empty value.
pub fn first_param(query: Option<&str>, name: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}
