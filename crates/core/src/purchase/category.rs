//! Category extraction from purchase descriptions.

/// Category used when a description carries no parenthesized label.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Extracts the category label from a purchase description.
///
/// The label is the content of the last complete parenthesized group in
/// the text; surrounding whitespace is trimmed. Descriptions without a
/// non-empty group fall back to [`DEFAULT_CATEGORY`].
///
/// ```
/// use mammon_core::purchase::extract_category;
///
/// assert_eq!(extract_category("Coffee (Personal)"), "Personal");
/// assert_eq!(extract_category("Rent"), "Other");
/// ```
#[must_use]
pub fn extract_category(description: &str) -> &str {
    let Some(close) = description.rfind(')') else {
        return DEFAULT_CATEGORY;
    };
    let Some(open) = description[..close].rfind('(') else {
        return DEFAULT_CATEGORY;
    };

    let label = description[open + 1..close].trim();
    if label.is_empty() { DEFAULT_CATEGORY } else { label }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_CATEGORY, extract_category};

    #[rstest]
    #[case("Coffee (Personal)", "Personal")]
    #[case("Rent", "Other")]
    #[case("Netflix (Subscriptions)", "Subscriptions")]
    #[case("Tea (green) (Groceries)", "Groceries")]
    #[case("Dinner ( Leisure )", "Leisure")]
    #[case("Oops (", "Other")]
    #[case("Oops )", "Other")]
    #[case("()", "Other")]
    #[case("(   )", "Other")]
    #[case("", "Other")]
    fn extracts_last_parenthesized_group(#[case] description: &str, #[case] expected: &str) {
        assert_eq!(extract_category(description), expected);
    }

    #[test]
    fn unclosed_trailing_group_falls_back_to_earlier_group() {
        assert_eq!(extract_category("Lunch (Bills) (oops"), "Bills");
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(DEFAULT_CATEGORY, "Other");
    }
}
