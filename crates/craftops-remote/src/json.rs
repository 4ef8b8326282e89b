/// Extract the top-level brace-delimited JSON objects from `text`.
///
/// The remote side concatenates several JSON files into one stream; this
/// splits them back apart by tracking brace depth in a single pass. A span
/// opens when depth goes 0 to 1 and closes when it returns to 0; spans come
/// back in closing order. Braces inside string literals are not accounted
/// for — the inputs are machine-generated stat files where that cannot
/// occur. An unterminated object is dropped.
pub fn extract_json_objects(text: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    objects.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    objects
}
