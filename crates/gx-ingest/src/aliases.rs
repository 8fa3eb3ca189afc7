use gx_core::record::dedup_preserving_order;
use gx_source::RawAlias;

use crate::error::IngestError;

/// Collecte les alias d'un caractère, tous types confondus.
///
/// Ordre source conservé, doublons ultérieurs retirés. Pas de tri.
///
/// # Errors
/// `IngestError::MissingAttribute` if a `name-alias` lacks its `alias` attribute.
///
/// # Example
/// ```
/// use gx_ingest::aliases::collect_aliases;
/// use gx_source::RawAlias;
///
/// let raw = ["NULL", "NUL", "NULL"].map(|a| RawAlias { alias: Some(a.into()), kind: None });
/// assert_eq!(collect_aliases("0000", &raw).unwrap(), ["NULL", "NUL"]);
/// ```
pub fn collect_aliases(code_point: &str, raw: &[RawAlias]) -> Result<Vec<String>, IngestError> {
    let aliases = raw
        .iter()
        .map(|a| {
            a.alias.clone().ok_or_else(|| IngestError::MissingAttribute {
                attribute: "alias",
                code_point: Some(code_point.to_string()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dedup_preserving_order(aliases))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(value: &str, kind: &str) -> RawAlias {
        RawAlias {
            alias: Some(value.into()),
            kind: Some(kind.into()),
        }
    }

    #[test]
    fn line_feed_aliases_keep_source_order() {
        let raw = [
            alias("LINE FEED", "control"),
            alias("NEW LINE", "control"),
            alias("END OF LINE", "control"),
            alias("LF", "abbreviation"),
            alias("NL", "abbreviation"),
            alias("EOL", "abbreviation"),
        ];
        assert_eq!(
            collect_aliases("000A", &raw).unwrap(),
            ["LINE FEED", "NEW LINE", "END OF LINE", "LF", "NL", "EOL"]
        );
    }

    #[test]
    fn duplicates_across_types_collapse() {
        let raw = [
            alias("NULL", "control"),
            alias("NUL", "abbreviation"),
            alias("NULL", "figment"),
        ];
        assert_eq!(collect_aliases("0000", &raw).unwrap(), ["NULL", "NUL"]);
    }

    #[test]
    fn no_aliases() {
        assert!(collect_aliases("0041", &[]).unwrap().is_empty());
    }

    #[test]
    fn alias_without_value() {
        let raw = [alias("OK", "control"), RawAlias::default()];
        assert_eq!(
            collect_aliases("0001", &raw).unwrap_err(),
            IngestError::MissingAttribute {
                attribute: "alias",
                code_point: Some("0001".into())
            }
        );
    }
}
