//! Package names derived from categories

/// Package segment for a category
///
/// Each path component loses a leading ordering prefix (`7_`); separators
/// become dots.
///
/// # Examples
///
/// ```
/// use regroup_synthesizer::package_segment;
///
/// assert_eq!(package_segment("7_sam_interfaces"), "sam_interfaces");
/// assert_eq!(package_segment("1_basic/generics"), "basic.generics");
/// ```
pub fn package_segment(category: &str) -> String {
    category
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .map(strip_ordering_prefix)
        .collect::<Vec<_>>()
        .join(".")
}

/// Full package path for a category under `root`
pub fn package_path(root: &str, category: &str) -> String {
    let segment = package_segment(category);
    let root = root.trim_end_matches('.');
    if segment.is_empty() {
        root.to_string()
    } else {
        format!("{}.{}", root, segment)
    }
}

fn strip_ordering_prefix(part: &str) -> &str {
    match part.split_once('_') {
        Some((digits, rest))
            if !digits.is_empty() && !rest.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => part,
    }
}
