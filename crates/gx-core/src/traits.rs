/// Primitive de correspondance floue, fournie par l'hôte.
///
/// Le classement n'est pas implémenté ici : le cœur ne fait que déléguer le
/// score et trier. Implémenté par : `TokenMatcher` (binaire `glyphdex`).
///
/// # Example
/// ```
/// use gx_core::traits::Matcher;
///
/// struct Exact;
/// impl Matcher for Exact {
///     fn score(&self, query: &str, candidate: &str) -> u8 {
///         if candidate.contains(query) { 100 } else { 0 }
///     }
/// }
/// assert_eq!(Exact.score("EOL", "U+000A LINE FEED (LF) EOL"), 100);
/// ```
pub trait Matcher {
    /// Similarité entre `query` et `candidate`, dans [0, 100].
    ///
    /// Les deux chaînes sont déjà en majuscules.
    fn score(&self, query: &str, candidate: &str) -> u8;
}
