/// A search query split into the terms sent as `word` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Split raw input on single spaces
    ///
    /// Runs of spaces are not collapsed and nothing is trimmed, so
    /// `"a  b"` yields `["a", "", "b"]`. Returns `None` for blank input,
    /// which never reaches the network.
    pub fn parse(raw: &str) -> Option<Self> {
        if is_blank(raw) {
            return None;
        }

        Some(Self {
            terms: raw.split(' ').map(str::to_string).collect(),
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Empty or whitespace-only input
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_term() {
        let query = Query::parse("rust").unwrap();
        assert_eq!(query.terms(), ["rust"]);
    }

    #[test]
    fn test_multiple_terms_keep_order() {
        let query = Query::parse("async rust book").unwrap();
        assert_eq!(query.terms(), ["async", "rust", "book"]);
    }

    #[test]
    fn test_double_space_keeps_empty_term() {
        let query = Query::parse("a  b").unwrap();
        assert_eq!(query.terms(), ["a", "", "b"]);
    }

    #[test]
    fn test_leading_and_trailing_spaces_not_trimmed() {
        let query = Query::parse(" a ").unwrap();
        assert_eq!(query.terms(), ["", "a", ""]);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(Query::parse(""), None);
    }

    #[test]
    fn test_whitespace_only_is_none() {
        assert_eq!(Query::parse("   "), None);
        assert_eq!(Query::parse("\t\n"), None);
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        let query = Query::parse("a\tb").unwrap();
        assert_eq!(query.terms(), ["a\tb"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Joining the terms back with single spaces reproduces the input.
        #[test]
        fn prop_terms_rejoin_to_input(raw in "[a-z ]{1,30}") {
            prop_assume!(!is_blank(&raw));
            let query = Query::parse(&raw).unwrap();
            prop_assert_eq!(query.terms().join(" "), raw);
        }

        #[test]
        fn prop_blank_inputs_never_parse(raw in "[ \t\r\n]{0,10}") {
            prop_assert!(Query::parse(&raw).is_none());
        }
    }
}
