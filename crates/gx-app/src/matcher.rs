use gx_core::traits::Matcher;

/// Similarité minimale d'un mot pour compter.
const WORD_THRESHOLD: f64 = 0.8;

/// Jaro-Winkler par mot : chaque mot de la requête prend sa meilleure
/// similarité parmi les mots du candidat, puis moyenne.
///
/// A candidate containing the whole query scores 100; fuzzy matches top
/// out at 99.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl Matcher for TokenMatcher {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn score(&self, query: &str, candidate: &str) -> u8 {
        if candidate.contains(query) {
            return 100;
        }
        let words: Vec<&str> = candidate.split_whitespace().collect();
        let mut total = 0.0_f64;
        let mut count = 0usize;
        for q in query.split_whitespace() {
            let best = words
                .iter()
                .map(|w| strsim::jaro_winkler(q, w))
                .fold(0.0_f64, f64::max);
            if best >= WORD_THRESHOLD {
                total += best;
            }
            count += 1;
        }
        if count == 0 {
            return 0;
        }
        (total / count as f64 * 99.0).round().clamp(0.0, 99.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_perfect() {
        assert_eq!(TokenMatcher.score("EM DASH", "U+2014 EM DASH"), 100);
    }

    #[test]
    fn typo_still_matches() {
        let s = TokenMatcher.score("LENTICULAR BRAKET", "U+FE18 PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET");
        assert!(s > 80 && s < 100, "score {s}");
    }

    #[test]
    fn unrelated_scores_zero() {
        assert_eq!(TokenMatcher.score("HANGUL", "U+0041 LATIN CAPITAL LETTER A"), 0);
    }
}
