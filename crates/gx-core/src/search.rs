use crate::record::CharacterRecord;
use crate::table::CharacterTable;
use crate::traits::Matcher;

/// One ranked search result.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub record: &'a CharacterRecord,
    pub score: u8,
    /// Position dans la table (ordre source).
    pub index: usize,
}

/// Score every record against `query` and keep the best `limit` hits.
///
/// Scores below `cutoff` are dropped; a `cutoff` of 0 keeps every record,
/// zero scores included. Ordering is score descending, then
/// table position ascending, so equal scores keep source order.
///
/// # Example
/// ```
/// use gx_core::record::CharacterRecord;
/// use gx_core::search::search;
/// use gx_core::table::CharacterTable;
/// use gx_core::traits::Matcher;
///
/// struct Contains;
/// impl Matcher for Contains {
///     fn score(&self, q: &str, c: &str) -> u8 { if c.contains(q) { 90 } else { 0 } }
/// }
///
/// let table: CharacterTable = [
///     CharacterRecord::new("0041", "LATIN CAPITAL LETTER A", "Basic Latin", vec![]).unwrap(),
///     CharacterRecord::new("2014", "EM DASH", "General Punctuation", vec![]).unwrap(),
/// ].into_iter().collect();
///
/// let hits = search(&table, "em dash", &Contains, 10, 1);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].record.code_point(), "2014");
/// ```
#[must_use]
pub fn search<'a>(
    table: &'a CharacterTable,
    query: &str,
    matcher: &dyn Matcher,
    limit: usize,
    cutoff: u8,
) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_uppercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = table
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let score = matcher.score(&query, record.search_text());
            (score >= cutoff).then_some(SearchHit {
                record,
                score,
                index,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    hits.truncate(limit);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores by the number of query words found in the candidate.
    struct WordCount;
    impl Matcher for WordCount {
        fn score(&self, query: &str, candidate: &str) -> u8 {
            let words: Vec<&str> = candidate.split_whitespace().collect();
            let found = query.split_whitespace().filter(|w| words.contains(w)).count();
            u8::try_from(found * 10).unwrap_or(100)
        }
    }

    fn table() -> CharacterTable {
        [
            ("000A", "LINE FEED (LF)", vec!["END OF LINE", "EOL"]),
            ("000D", "CARRIAGE RETURN (CR)", vec![]),
            ("2028", "LINE SEPARATOR", vec![]),
            ("0041", "LATIN CAPITAL LETTER A", vec![]),
        ]
        .into_iter()
        .map(|(cp, na, als)| {
            CharacterRecord::new(
                cp,
                na,
                "Basic Latin",
                als.into_iter().map(String::from).collect(),
            )
            .unwrap()
        })
        .collect()
    }

    #[test]
    fn ranks_by_score_then_position() {
        let table = table();
        let hits = search(&table, "end of line", &WordCount, 10, 1);
        let cps: Vec<&str> = hits.iter().map(|h| h.record.code_point()).collect();
        assert_eq!(cps, ["000A", "2028"]);
        assert_eq!(hits[0].score, 30);
        assert_eq!(hits[1].index, 2);
    }

    #[test]
    fn query_is_uppercased() {
        let table = table();
        let hits = search(&table, "eol", &WordCount, 10, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.code_point(), "000A");
    }

    #[test]
    fn zero_cutoff_keeps_zero_scores() {
        let table = table();
        let hits = search(&table, "zebra", &WordCount, 10, 0);
        assert_eq!(hits.len(), table.len());
        assert!(hits.iter().all(|h| h.score == 0));
        let positions: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(positions, [0, 1, 2, 3]);
    }

    #[test]
    fn zero_scores_and_limits() {
        let table = table();
        assert!(search(&table, "zebra", &WordCount, 10, 1).is_empty());
        assert!(search(&table, "line", &WordCount, 0, 1).is_empty());
        assert!(search(&table, "   ", &WordCount, 10, 1).is_empty());
        assert_eq!(search(&table, "line", &WordCount, 1, 1).len(), 1);
        assert!(search(&table, "line", &WordCount, 10, 50).is_empty());
    }
}
