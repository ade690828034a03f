//! List formatting.
//!
//! Joins an ordered sequence of text values into a single comma-separated
//! line. The join is only reversible when no element itself contains
//! [`LIST_SEPARATOR`].

/// Separator placed between consecutive elements.
pub const LIST_SEPARATOR: &str = ", ";

/// Joins `items` in order, separated by [`LIST_SEPARATOR`].
///
/// An empty sequence produces an empty string. Empty elements are kept, so
/// `["", "a"]` becomes `", a"`.
#[must_use]
pub fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(LIST_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Splits a line produced by [`format_list`] back into its elements.
///
/// The empty string splits into no elements. Elements that contained
/// [`LIST_SEPARATOR`] before joining come back split apart, and a
/// single empty element is indistinguishable from no elements.
#[must_use]
pub fn split_list(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(LIST_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_joins_three_elements() {
        assert_eq!(format_list(["a", "b", "c"]), "a, b, c");
    }

    #[test]
    fn test_format_list_empty_is_empty_string() {
        assert_eq!(format_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_format_list_single_element_has_no_separator() {
        assert_eq!(format_list(["a"]), "a");
    }

    #[test]
    fn test_format_list_keeps_empty_elements() {
        assert_eq!(format_list(["", "a"]), ", a");
        assert_eq!(format_list(["a", ""]), "a, ");
        assert_eq!(format_list(["", ""]), ", ");
    }

    #[test]
    fn test_format_list_preserves_order_and_duplicates() {
        assert_eq!(format_list(["b", "a", "b"]), "b, a, b");
    }

    #[test]
    fn test_format_list_accepts_owned_strings_and_iterators() {
        let owned = vec!["x".to_owned(), "y".to_owned()];
        assert_eq!(format_list(&owned), "x, y");
        assert_eq!(format_list(owned.iter().map(String::as_str).rev()), "y, x");
    }

    #[test]
    fn test_format_list_separator_count_is_len_minus_one() {
        let items = ["alpha", "beta", "gamma", "delta"];
        let line = format_list(items);
        assert_eq!(line.matches(LIST_SEPARATOR).count(), items.len() - 1);
        assert!(!line.starts_with(LIST_SEPARATOR));
        assert!(!line.ends_with(LIST_SEPARATOR));
    }

    #[test]
    fn test_format_list_handles_multibyte_text() {
        assert_eq!(format_list(["été", "日本", "🦀"]), "été, 日本, 🦀");
    }

    #[test]
    fn test_split_list_reverses_format_list() {
        let cases: [&[&str]; 5] = [
            &[],
            &["a"],
            &["a", "b", "c"],
            &["", "a"],
            &["comma,no-space", "space only", "trailing,"],
        ];
        for items in cases {
            let line = format_list(items);
            assert_eq!(split_list(&line), items, "round trip of {items:?}");
        }
    }

    #[test]
    fn test_split_list_does_not_recover_colliding_elements() {
        let line = format_list(["a, b", "c"]);
        assert_eq!(split_list(&line), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_list_single_empty_element_reads_as_empty() {
        assert!(split_list(&format_list([""])).is_empty());
    }
}
