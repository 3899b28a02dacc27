//! Small text helpers for admin-entered content and field names.

/// Split newline-delimited admin text (bullet points, benefit lists) into
/// trimmed, non-empty entries.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split comma-delimited admin text (service topics) into trimmed,
/// non-empty entries.
pub fn split_commas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Humanize a snake_case payload field name for user-facing validation
/// messages: `full_name` -> `Full Name`.
pub fn humanize_field(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
