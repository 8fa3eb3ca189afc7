use crate::error::IngestError;

/// Code points whose only name lives in a `figment` name alias.
///
/// Keyed by `U+XXXX` display form.
pub const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("U+0080", "PADDING CHARACTER"),
    ("U+0081", "HIGH OCTET PRESET"),
    ("U+0084", "INDEX"),
    ("U+0099", "SINGLE GRAPHIC CHARACTER INTRODUCER"),
];

/// Placeholder of algorithmically named ranges (`CJK UNIFIED IDEOGRAPH-#`).
pub const CODE_POINT_PLACEHOLDER: char = '#';

/// Name attributes of one `<char>`, as read from the document.
///
/// `None` means the attribute is absent, which is distinct from present
/// and empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameAttributes<'a> {
    /// `na`
    pub primary: Option<&'a str>,
    /// `na1`
    pub legacy: Option<&'a str>,
    /// `age`
    pub age: Option<&'a str>,
}

/// Résout le nom d'affichage d'un caractère.
///
/// Ordre strict :
/// 1. `na` non vide ;
/// 2. sinon `na1` non vide si `age` commence par `"1"` ;
/// 3. sinon la table `special` (clé `U+XXXX`) ;
/// 4. sinon `IngestError::UnhandledName`.
///
/// Puis chaque `#` est remplacé par `code_point`.
///
/// `age` et `na1` ne sont exigés que si `na` est vide.
///
/// # Errors
/// `IngestError::MissingAttribute` if a consulted attribute is absent,
/// `IngestError::UnhandledName` if no rule applies.
///
/// # Example
/// ```
/// use gx_ingest::names::{resolve_name, NameAttributes, SPECIAL_NAMES};
///
/// let attrs = NameAttributes { primary: Some("CJK UNIFIED IDEOGRAPH-#"), ..Default::default() };
/// assert_eq!(resolve_name("4E00", &attrs, SPECIAL_NAMES).unwrap(), "CJK UNIFIED IDEOGRAPH-4E00");
///
/// let attrs = NameAttributes { primary: Some(""), legacy: Some("NULL"), age: Some("1.1") };
/// assert_eq!(resolve_name("0000", &attrs, SPECIAL_NAMES).unwrap(), "NULL");
/// ```
pub fn resolve_name(
    code_point: &str,
    attrs: &NameAttributes<'_>,
    special: &[(&str, &str)],
) -> Result<String, IngestError> {
    let name = raw_name(code_point, attrs, special)?;
    if name.contains(CODE_POINT_PLACEHOLDER) {
        return Ok(name.replace(CODE_POINT_PLACEHOLDER, code_point));
    }
    Ok(name.to_string())
}

fn raw_name<'a>(
    code_point: &str,
    attrs: &NameAttributes<'a>,
    special: &[(&str, &'a str)],
) -> Result<&'a str, IngestError> {
    let missing = |attribute| IngestError::MissingAttribute {
        attribute,
        code_point: Some(code_point.to_string()),
    };

    let primary = attrs.primary.ok_or_else(|| missing("na"))?;
    if !primary.is_empty() {
        return Ok(primary);
    }

    let age = attrs.age.ok_or_else(|| missing("age"))?;
    let legacy = attrs.legacy.ok_or_else(|| missing("na1"))?;
    if age.starts_with('1') && !legacy.is_empty() {
        return Ok(legacy);
    }

    let display = format!("U+{code_point}");
    special
        .iter()
        .find(|(cp, _)| *cp == display)
        .map(|(_, name)| *name)
        .ok_or_else(|| IngestError::UnhandledName {
            code_point: code_point.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<'a>(na: &'a str, na1: &'a str, age: &'a str) -> NameAttributes<'a> {
        NameAttributes {
            primary: Some(na),
            legacy: Some(na1),
            age: Some(age),
        }
    }

    #[test]
    fn primary_name_wins() {
        let a = attrs("LATIN CAPITAL LETTER A", "SOMETHING ELSE", "1.1");
        assert_eq!(
            resolve_name("0041", &a, SPECIAL_NAMES).unwrap(),
            "LATIN CAPITAL LETTER A"
        );
    }

    #[test]
    fn legacy_name_for_unicode_1_controls() {
        let a = attrs("", "LINE FEED (LF)", "1.1");
        assert_eq!(
            resolve_name("000A", &a, SPECIAL_NAMES).unwrap(),
            "LINE FEED (LF)"
        );
    }

    #[test]
    fn legacy_name_ignored_for_later_ages() {
        let a = attrs("", "OLD NAME", "3.0");
        assert_eq!(
            resolve_name("2FFF", &a, SPECIAL_NAMES).unwrap_err(),
            IngestError::UnhandledName {
                code_point: "2FFF".into()
            }
        );
    }

    #[test]
    fn special_table_entries() {
        for (display, expected) in SPECIAL_NAMES {
            let cp = display.trim_start_matches("U+");
            let a = attrs("", "", "1.1");
            assert_eq!(resolve_name(cp, &a, SPECIAL_NAMES).unwrap(), *expected);
        }
    }

    #[test]
    fn special_table_is_well_formed() {
        for (display, name) in SPECIAL_NAMES {
            let cp = display.strip_prefix("U+").unwrap();
            assert!(gx_core::record::parse_code_point(cp).is_ok(), "{display}");
            assert!(!name.is_empty());
            assert!(!name.contains(CODE_POINT_PLACEHOLDER));
        }
        assert_eq!(SPECIAL_NAMES.len(), 4);
    }

    #[test]
    fn unhandled_name_is_fatal() {
        let a = attrs("", "", "1.1");
        assert_eq!(
            resolve_name("0082", &a, SPECIAL_NAMES).unwrap_err(),
            IngestError::UnhandledName {
                code_point: "0082".into()
            }
        );
        assert!(resolve_name("0080", &a, &[]).is_err());
    }

    #[test]
    fn every_placeholder_is_replaced() {
        let a = attrs("TANGUT IDEOGRAPH-#", "", "9.0");
        assert_eq!(
            resolve_name("17000", &a, SPECIAL_NAMES).unwrap(),
            "TANGUT IDEOGRAPH-17000"
        );
        let a = attrs("#-#", "", "9.0");
        assert_eq!(resolve_name("00AB", &a, SPECIAL_NAMES).unwrap(), "00AB-00AB");
    }

    #[test]
    fn placeholder_applies_to_legacy_names_too() {
        let a = attrs("", "OLD-#", "1.1");
        assert_eq!(resolve_name("00AB", &a, SPECIAL_NAMES).unwrap(), "OLD-00AB");
    }

    #[test]
    fn missing_attributes_are_lazy() {
        let only_na = NameAttributes {
            primary: Some("EM DASH"),
            ..Default::default()
        };
        assert_eq!(resolve_name("2014", &only_na, SPECIAL_NAMES).unwrap(), "EM DASH");

        let no_na = NameAttributes::default();
        assert_eq!(
            resolve_name("2014", &no_na, SPECIAL_NAMES).unwrap_err(),
            IngestError::MissingAttribute {
                attribute: "na",
                code_point: Some("2014".into())
            }
        );

        let no_age = NameAttributes {
            primary: Some(""),
            legacy: Some("X"),
            age: None,
        };
        assert!(matches!(
            resolve_name("0001", &no_age, SPECIAL_NAMES).unwrap_err(),
            IngestError::MissingAttribute { attribute: "age", .. }
        ));
    }

    #[test]
    fn deterministic() {
        let a = attrs("", "NULL", "1.1");
        let first = resolve_name("0000", &a, SPECIAL_NAMES).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_name("0000", &a, SPECIAL_NAMES).unwrap(), first);
        }
    }
}
