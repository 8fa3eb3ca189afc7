use gx_core::{CharacterRecord, CharacterTable};

use crate::error::ValidationError;

/// Known-correct expectations, keyed by bare code point.
#[derive(Clone, Copy, Debug)]
pub struct Canaries {
    pub names: &'static [(&'static str, &'static str)],
    pub blocks: &'static [(&'static str, &'static str)],
    /// `(code point, alias that must be present)`.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl Canaries {
    /// Canaris de la base Unicode, dont les anomalies de nommage connues.
    ///
    /// Voir UTN #27 (Known anomalies in Unicode Character Names).
    pub const UCD: Canaries = Canaries {
        names: &[
            ("0000", "NULL"),
            ("000A", "LINE FEED (LF)"),
            ("0041", "LATIN CAPITAL LETTER A"),
            ("2014", "EM DASH"),
            ("4E00", "CJK UNIFIED IDEOGRAPH-4E00"),
            ("6F22", "CJK UNIFIED IDEOGRAPH-6F22"),
            ("AC00", "HANGUL SYLLABLE GA"),
            ("B098", "HANGUL SYLLABLE NA"),
            ("D7A3", "HANGUL SYLLABLE HIH"),
            // Faute d'orthographe officielle, corrigée par un alias.
            (
                "FE18",
                "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRAKCET",
            ),
        ],
        blocks: &[
            ("0000", "Basic Latin"),
            ("2014", "General Punctuation"),
            ("4E00", "CJK Unified Ideographs"),
            ("AC00", "Hangul Syllables"),
        ],
        aliases: &[
            ("0000", "NULL"),
            ("000A", "END OF LINE"),
            ("000A", "EOL"),
            ("000A", "LF"),
            ("000A", "LINE FEED"),
            ("000A", "NEW LINE"),
            ("000A", "NL"),
            (
                "FE18",
                "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET",
            ),
        ],
    };
}

/// Vérifie les canaris UCD sur une table, générée ou chargée depuis le disque.
///
/// # Errors
/// The first [`ValidationError`] encountered: names, then blocks, then aliases.
pub fn validate(table: &CharacterTable) -> Result<(), ValidationError> {
    validate_with(table, &Canaries::UCD)
}

/// Same as [`validate`] with a custom canary set.
///
/// # Errors
/// The first [`ValidationError`] encountered.
pub fn validate_with(table: &CharacterTable, canaries: &Canaries) -> Result<(), ValidationError> {
    for &(cp, expected) in canaries.names {
        let record = expect_record(table, cp)?;
        if record.name() != expected {
            return Err(ValidationError::NameMismatch {
                code_point: cp.to_string(),
                actual: record.name().to_string(),
                expected: expected.to_string(),
            });
        }
    }

    for &(cp, expected) in canaries.blocks {
        let record = expect_record(table, cp)?;
        if record.block_name() != expected {
            return Err(ValidationError::BlockMismatch {
                code_point: cp.to_string(),
                actual: record.block_name().to_string(),
                expected: expected.to_string(),
            });
        }
    }

    for &(cp, expected) in canaries.aliases {
        let record = expect_record(table, cp)?;
        if !record.aliases().iter().any(|a| a == expected) {
            return Err(ValidationError::AliasMissing {
                code_point: cp.to_string(),
                expected: expected.to_string(),
                actual: record.aliases().to_vec(),
            });
        }
    }

    log::info!(
        "Validation réussie : {} noms, {} blocs, {} alias",
        canaries.names.len(),
        canaries.blocks.len(),
        canaries.aliases.len()
    );
    Ok(())
}

fn expect_record<'a>(
    table: &'a CharacterTable,
    code_point: &str,
) -> Result<&'a CharacterRecord, ValidationError> {
    table
        .get(code_point)
        .map_err(|_| ValidationError::MissingRecord {
            code_point: code_point.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gx_core::record::parse_code_point;

    /// Table satisfaisant tous les canaris UCD.
    fn canary_table() -> CharacterTable {
        let rec = |cp: &str, na: &str, blk: &str, als: &[&str]| {
            CharacterRecord::new(cp, na, blk, als.iter().map(|s| (*s).to_string()).collect())
                .unwrap()
        };
        [
            rec("0000", "NULL", "Basic Latin", &["NULL", "NUL"]),
            rec(
                "000A",
                "LINE FEED (LF)",
                "Basic Latin",
                &["LINE FEED", "NEW LINE", "END OF LINE", "LF", "NL", "EOL"],
            ),
            rec("0041", "LATIN CAPITAL LETTER A", "Basic Latin", &[]),
            rec("2014", "EM DASH", "General Punctuation", &[]),
            rec("4E00", "CJK UNIFIED IDEOGRAPH-4E00", "CJK Unified Ideographs", &[]),
            rec("6F22", "CJK UNIFIED IDEOGRAPH-6F22", "CJK Unified Ideographs", &[]),
            rec("AC00", "HANGUL SYLLABLE GA", "Hangul Syllables", &[]),
            rec("B098", "HANGUL SYLLABLE NA", "Hangul Syllables", &[]),
            rec("D7A3", "HANGUL SYLLABLE HIH", "Hangul Syllables", &[]),
            rec(
                "FE18",
                "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRAKCET",
                "Vertical Forms",
                &["PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET"],
            ),
        ]
        .into_iter()
        .collect()
    }

    fn replace(table: &mut CharacterTable, record: CharacterRecord) {
        assert!(table.insert(record).is_some());
    }

    #[test]
    fn canary_table_passes() {
        validate(&canary_table()).unwrap();
    }

    #[test]
    fn canary_code_points_are_well_formed() {
        let c = Canaries::UCD;
        for (cp, value) in c.names.iter().chain(c.blocks).chain(c.aliases) {
            assert!(parse_code_point(cp).is_ok(), "{cp}");
            assert!(!value.is_empty(), "{cp}");
        }
    }

    #[test]
    fn corrected_spelling_is_alias_only() {
        let c = Canaries::UCD;
        let (_, name) = c.names.iter().find(|(cp, _)| *cp == "FE18").unwrap();
        let (_, alias) = c.aliases.iter().find(|(cp, _)| *cp == "FE18").unwrap();
        assert!(name.ends_with("BRAKCET"));
        assert!(alias.ends_with("BRACKET"));
        assert_ne!(name, alias);
    }

    #[test]
    fn name_mismatch_reports_both_values() {
        let mut table = canary_table();
        replace(
            &mut table,
            CharacterRecord::new(
                "FE18",
                "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET",
                "Vertical Forms",
                vec![],
            )
            .unwrap(),
        );
        let err = validate(&table).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NameMismatch {
                code_point: "FE18".into(),
                actual: "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET".into(),
                expected: "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRAKCET".into(),
            }
        );
        assert!(err.to_string().contains("BRAKCET"));
    }

    #[test]
    fn block_mismatch() {
        let mut table = canary_table();
        replace(
            &mut table,
            CharacterRecord::new("AC00", "HANGUL SYLLABLE GA", "Hangul Jamo", vec![]).unwrap(),
        );
        assert_eq!(
            validate(&table).unwrap_err(),
            ValidationError::BlockMismatch {
                code_point: "AC00".into(),
                actual: "Hangul Jamo".into(),
                expected: "Hangul Syllables".into(),
            }
        );
    }

    #[test]
    fn missing_alias() {
        let mut table = canary_table();
        replace(
            &mut table,
            CharacterRecord::new(
                "000A",
                "LINE FEED (LF)",
                "Basic Latin",
                vec!["LINE FEED".into()],
            )
            .unwrap(),
        );
        assert_eq!(
            validate(&table).unwrap_err(),
            ValidationError::AliasMissing {
                code_point: "000A".into(),
                expected: "END OF LINE".into(),
                actual: vec!["LINE FEED".into()],
            }
        );
    }

    #[test]
    fn missing_record() {
        let table: CharacterTable = canary_table()
            .iter()
            .filter(|r| r.code_point() != "2014")
            .cloned()
            .collect();
        assert_eq!(
            validate(&table).unwrap_err(),
            ValidationError::MissingRecord {
                code_point: "2014".into()
            }
        );
        assert!(validate(&CharacterTable::new()).is_err());
    }
}
