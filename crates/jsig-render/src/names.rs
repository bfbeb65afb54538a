//! Pure string operations on plain dotted names, independent of the
//! signature grammar. Dots inside `<...>` never count as separators.

/// Everything before the last qualifier dot: `java.lang.Object` →
/// `java.lang`. A simple or empty name has an empty qualifier.
pub fn get_qualifier(name: &str) -> &str {
    match last_separator_dot(name) {
        Some(dot) => &name[..dot],
        None => "",
    }
}

/// Everything after the last qualifier dot: `java.lang.Object` → `Object`.
pub fn get_simple_name(name: &str) -> &str {
    match last_separator_dot(name) {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}

/// All dot-separated segments of `name`; empty input yields no segments.
pub fn get_simple_names(name: &str) -> Vec<&str> {
    if name.is_empty() {
        return Vec::new();
    }
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut depth = 0usize;
    for (i, c) in name.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&name[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&name[start..]);
    segments
}

/// Joins segments with dots.
pub fn to_qualified_name(segments: &[&str]) -> String {
    segments.join(".")
}

fn last_separator_dot(name: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut last = None;
    for (i, c) in name.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => last = Some(i),
            _ => {}
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn qualifier_and_simple_name() {
        assert_eq!(get_qualifier("java.lang.Object"), "java.lang");
        assert_eq!(get_simple_name("java.lang.Object"), "Object");
        assert_eq!(get_qualifier("Object"), "");
        assert_eq!(get_simple_name("Object"), "Object");
        assert_eq!(get_qualifier(""), "");
        assert_eq!(get_simple_name(""), "");
    }

    #[test]
    fn generic_arguments_do_not_split() {
        assert_eq!(get_qualifier("java.util.Map<java.lang.String,V>"), "java.util");
        assert_eq!(get_simple_name("java.util.Map<java.lang.String,V>"), "Map<java.lang.String,V>");
    }

    #[test]
    fn simple_names_lists_segments() {
        assert_eq!(get_simple_names("a.b.C"), vec!["a", "b", "C"]);
        assert_eq!(get_simple_names("C"), vec!["C"]);
        assert_eq!(get_simple_names(""), Vec::<&str>::new());
    }

    #[test]
    fn to_qualified_name_joins() {
        assert_eq!(to_qualified_name(&["java", "lang", "Object"]), "java.lang.Object");
        assert_eq!(to_qualified_name(&[]), "");
    }
}
