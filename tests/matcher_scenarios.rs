use texthl::{find_matches, MatchOptions};

fn find(content: &str, query: &str, options: MatchOptions) -> Vec<(usize, usize)> {
    find_matches(content, query, &options)
        .into_iter()
        .map(Into::into)
        .collect()
}

fn defaults() -> MatchOptions {
    MatchOptions::default()
}

#[cfg(test)]
mod word_boundary_tests {
    use super::*;

    #[test]
    fn test_matches_at_start_of_word() {
        assert_eq!(find("some text", "te", defaults()), vec![(5, 7)]);
    }

    #[test]
    fn test_rejects_mid_word_match() {
        assert!(find("some text", "e", defaults()).is_empty());
    }

    #[test]
    fn test_inside_words_accepts_mid_word_match() {
        let options = MatchOptions::builder().inside_words(true).build();
        assert_eq!(find("some text", "e", options), vec![(3, 4)]);
    }

    #[test]
    fn test_boundary_detection_ignores_case() {
        assert_eq!(find("SOME TEXT", "te", defaults()), vec![(5, 7)]);
        assert!(find("SOME TEXT", "E", defaults()).is_empty());
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert!(find("abc1x", "x", defaults()).is_empty());
        assert_eq!(find("1-x", "x", defaults()), vec![(2, 3)]);
    }
}

#[cfg(test)]
mod occurrence_tests {
    use super::*;

    #[test]
    fn test_first_occurrence_only_by_default() {
        assert_eq!(find("some sweet text", "s", defaults()), vec![(0, 1)]);
    }

    #[test]
    fn test_find_all_occurrences() {
        let options = MatchOptions::builder().find_all_occurrences(true).build();
        assert_eq!(find("some sweet text", "s", options), vec![(0, 1), (5, 6)]);
    }

    #[test]
    fn test_find_all_with_inside_words() {
        let options = MatchOptions::builder()
            .find_all_occurrences(true)
            .inside_words(true)
            .build();
        assert_eq!(
            find("some sweet text", "e", options),
            vec![(3, 4), (7, 8), (8, 9), (12, 13)]
        );
    }
}

#[cfg(test)]
mod multi_token_tests {
    use super::*;

    #[test]
    fn test_tokens_sorted_and_case_insensitive() {
        assert_eq!(find("Albert Einstein", "e a", defaults()), vec![(0, 1), (7, 8)]);
    }

    #[test]
    fn test_adjacent_matches_not_merged() {
        assert_eq!(
            find("Very nice day", "very nice day", defaults()),
            vec![(0, 4), (5, 9), (10, 13)]
        );
    }

    #[test]
    fn test_overlapping_matches_not_merged() {
        let options = MatchOptions::builder().inside_words(true).build();
        assert_eq!(find("abcdef", "abc bcd", options), vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn test_same_start_sorted_by_end() {
        assert_eq!(find("foobar", "foobar foo", defaults()), vec![(0, 3), (0, 6)]);
    }

    #[test]
    fn test_token_order_does_not_matter() {
        assert_eq!(
            find("Very nice day", "day very", defaults()),
            find("Very nice day", "very day", defaults())
        );
    }
}

#[cfg(test)]
mod require_all_tests {
    use super::*;

    #[test]
    fn test_missing_token_suppresses_everything() {
        let options = MatchOptions::builder().require_match_all(true).build();
        assert!(find("some text", "s sweet", options).is_empty());
    }

    #[test]
    fn test_all_tokens_present() {
        let options = MatchOptions::builder().require_match_all(true).build();
        assert_eq!(find("some text", "s t", options), vec![(0, 1), (5, 6)]);
    }

    #[test]
    fn test_word_rule_counts_as_no_match() {
        let options = MatchOptions::builder().require_match_all(true).build();
        assert!(find("some text", "some ext", options).is_empty());
    }

    #[test]
    fn test_without_flag_partial_results_kept() {
        assert_eq!(find("some text", "s sweet", defaults()), vec![(0, 1)]);
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn test_special_characters_match_literally() {
        let content = "Tom & Jerry (1940), cat-and-mouse?";
        assert_eq!(find(content, "&", defaults()), vec![(4, 5)]);
        assert_eq!(find(content, "(1940),", defaults()), vec![(12, 19)]);
        let inside = MatchOptions::builder().inside_words(true).build();
        assert_eq!(find(content, "-and-mouse?", inside), vec![(23, 34)]);
        assert_eq!(find(content, "?", inside), vec![(33, 34)]);
    }

    #[test]
    fn test_regex_syntax_is_not_interpreted() {
        assert!(find("some text", ".*", defaults()).is_empty());
        assert_eq!(find("a .* b", ".*", defaults()), vec![(2, 4)]);
        assert!(find("aaa", "a+", defaults()).is_empty());
    }
}

#[cfg(test)]
mod blank_input_tests {
    use super::*;

    #[test]
    fn test_blank_queries_match_nothing() {
        let everything = MatchOptions::builder()
            .inside_words(true)
            .find_all_occurrences(true)
            .build();
        for query in ["", " ", "\t\n", "   \u{3000} "] {
            assert!(find("some text", query, defaults()).is_empty());
            assert!(find("some text", query, everything).is_empty());
        }
    }

    #[test]
    fn test_empty_content() {
        assert!(find("", "text", defaults()).is_empty());
        let options = MatchOptions::builder().require_match_all(true).build();
        assert!(find("", "text", options).is_empty());
    }

    #[test]
    fn test_whitespace_inside_query_splits_tokens() {
        assert_eq!(
            find("Very nice day", "  very\t\tnice\nday  ", defaults()),
            vec![(0, 4), (5, 9), (10, 13)]
        );
    }
}
