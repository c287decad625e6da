use proptest::prelude::*;
use texthl::{find_matches, MatchOptions, OffsetUnit};

fn options() -> impl Strategy<Value = MatchOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(inside, all, require)| {
        MatchOptions::builder()
            .inside_words(inside)
            .find_all_occurrences(all)
            .require_match_all(require)
            .build()
    })
}

// Small alphabets so that matches actually happen.
const CONTENT: &str = "[a-cA-C é😀.(-]{0,24}";
const QUERY: &str = "[a-cA-C é😀.(\t-]{0,8}";

proptest! {
    #[test]
    fn ranges_stay_in_bounds(content in CONTENT, query in QUERY, opts in options()) {
        let len = content.encode_utf16().count();
        for r in find_matches(&content, &query, &opts) {
            prop_assert!(r.start < r.end);
            prop_assert!(r.end <= len);
        }
    }

    #[test]
    fn ranges_sorted_without_duplicates(content in CONTENT, query in QUERY, opts in options()) {
        let ranges = find_matches(&content, &query, &opts);
        for pair in ranges.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} not strictly before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn blank_query_matches_nothing(content in CONTENT, query in "[ \t\n]{0,6}", opts in options()) {
        prop_assert!(find_matches(&content, &query, &opts).is_empty());
    }

    #[test]
    fn repeated_calls_agree(content in CONTENT, query in QUERY, opts in options()) {
        prop_assert_eq!(
            find_matches(&content, &query, &opts),
            find_matches(&content, &query, &opts)
        );
    }

    #[test]
    fn each_range_is_some_token(content in CONTENT, query in QUERY, opts in options()) {
        let byte_opts = MatchOptions { offset_unit: OffsetUnit::Byte, ..opts };
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        for r in find_matches(&content, &query, &byte_opts) {
            let slice = content[r.start..r.end].to_lowercase();
            prop_assert!(tokens.contains(&slice), "{:?} is not a query token", slice);
        }
    }

    #[test]
    fn offset_units_describe_the_same_text(content in CONTENT, query in QUERY, opts in options()) {
        let unit = |u| MatchOptions { offset_unit: u, ..opts };
        let bytes = find_matches(&content, &query, &unit(OffsetUnit::Byte));
        let chars = find_matches(&content, &query, &unit(OffsetUnit::Char));
        let utf16 = find_matches(&content, &query, &unit(OffsetUnit::Utf16));
        prop_assert_eq!(bytes.len(), chars.len());
        prop_assert_eq!(bytes.len(), utf16.len());

        let all_chars: Vec<char> = content.chars().collect();
        let all_units: Vec<u16> = content.encode_utf16().collect();
        for ((b, c), u) in bytes.iter().zip(&chars).zip(&utf16) {
            let by_byte = &content[b.start..b.end];
            let by_char: String = all_chars[c.start..c.end].iter().collect();
            let by_unit = String::from_utf16_lossy(&all_units[u.start..u.end]);
            prop_assert_eq!(by_byte, by_char.as_str());
            prop_assert_eq!(by_byte, by_unit.as_str());
        }
    }

    #[test]
    fn require_all_is_all_or_nothing(content in CONTENT, query in QUERY) {
        let relaxed = MatchOptions::builder().find_all_occurrences(true).build();
        let strict = MatchOptions { require_match_all: true, ..relaxed };
        let strict_ranges = find_matches(&content, &query, &strict);
        if !strict_ranges.is_empty() {
            prop_assert_eq!(strict_ranges, find_matches(&content, &query, &relaxed));
        }
    }
}
