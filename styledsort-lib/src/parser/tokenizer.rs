/// Splits line-broken text into trimmed, non-empty logical lines, keeping
/// their order.
pub fn split_logical_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
