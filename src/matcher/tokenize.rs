/// Split a query into its whitespace-delimited tokens.
///
/// Runs of whitespace of any kind (spaces, tabs, newlines) separate tokens;
/// leading and trailing whitespace never produces an empty token.
/// Duplicates are kept in order.
pub fn tokenize(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}
