use crate::models::ComboOption;

/// Derive the visible candidates for a query.
///
/// Keeps every option whose label contains `query` as a case-insensitive
/// substring, in source order. The empty query matches everything. No
/// trimming or normalization is applied to either side.
///
/// Always returns a freshly allocated vector; `options` is left untouched.
pub fn filter_options(options: &[ComboOption], query: &str) -> Vec<ComboOption> {
    if query.is_empty() {
        return options.to_vec();
    }

    let needle = query.to_lowercase();
    options.iter().filter(|option| label_contains(&option.label, &needle)).cloned().collect()
}

/// Case-insensitive substring match of a single label.
pub fn matches_query(option: &ComboOption, query: &str) -> bool {
    label_contains(&option.label, &query.to_lowercase())
}

fn label_contains(label: &str, lower_needle: &str) -> bool {
    label.to_lowercase().contains(lower_needle)
}
