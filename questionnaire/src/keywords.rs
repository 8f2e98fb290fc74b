/// Split a comma-separated keyword answer into its segments.
///
/// Segments are kept verbatim: whitespace around each comma survives, so
/// `"a, b,c"` becomes `["a", " b", "c"]`, and a blank answer becomes `[""]`.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
