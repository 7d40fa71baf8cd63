//! Display helpers for raw stored tokens.

/// `corn_stover` -> `Corn Stover`.
///
/// Splits on `_`, upper-cases the first character of each segment and joins
/// with single spaces. The rest of each segment is kept as stored.
pub fn format_material_type(token: &str) -> String {
    token
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
