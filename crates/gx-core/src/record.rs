use std::fmt;

use crate::error::CoreError;

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Parse a bare code point string (`"0041"`, `"1F600"`).
///
/// Accepts 4 to 6 uppercase hex digits, no `U+` prefix.
///
/// # Example
/// ```
/// use gx_core::record::parse_code_point;
/// assert_eq!(parse_code_point("004A").unwrap(), 0x4A);
/// assert!(parse_code_point("4a").is_err());
/// ```
pub fn parse_code_point(code_point: &str) -> Result<u32, CoreError> {
    let well_formed = (4..=6).contains(&code_point.len())
        && code_point
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
    if !well_formed {
        return Err(CoreError::InvalidCodePoint(code_point.to_string()));
    }
    match u32::from_str_radix(code_point, 16) {
        Ok(v) if v <= MAX_CODE_POINT => Ok(v),
        _ => Err(CoreError::InvalidCodePoint(code_point.to_string())),
    }
}

/// Canonical bare form of a code point value: uppercase hex, at least 4 digits.
#[must_use]
pub fn format_code_point(value: u32) -> String {
    format!("{value:04X}")
}

/// Remove later duplicates, keeping each string at its first position.
///
/// # Example
/// ```
/// use gx_core::record::dedup_preserving_order;
/// let v = dedup_preserving_order(vec!["b".into(), "a".into(), "b".into()]);
/// assert_eq!(v, vec!["b".to_string(), "a".to_string()]);
/// ```
#[must_use]
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Un caractère Unicode résolu : code point, nom, bloc, alias.
///
/// Immutable après construction. Les champs dérivés (valeur numérique,
/// scalaire décodé, chaîne de recherche) sont calculés une seule fois dans
/// [`CharacterRecord::new`].
///
/// # Example
/// ```
/// use gx_core::record::CharacterRecord;
/// let rec = CharacterRecord::new("0041", "LATIN CAPITAL LETTER A", "Basic Latin", vec![]).unwrap();
/// assert_eq!(rec.prefixed_code_point(), "U+0041");
/// assert_eq!(rec.character(), Some('A'));
/// assert_eq!(rec.search_text(), "U+0041 LATIN CAPITAL LETTER A");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRecord {
    code_point: String,
    name: String,
    block_name: String,
    aliases: Vec<String>,
    value: u32,
    prefixed: String,
    character: Option<char>,
    search_text: String,
}

impl CharacterRecord {
    /// Build a record and compute its derived fields.
    ///
    /// Duplicate aliases are dropped, first occurrence wins.
    ///
    /// # Errors
    /// `CoreError::EmptyField` if `code_point`, `name` or `block_name` is empty,
    /// `CoreError::InvalidCodePoint` if `code_point` is malformed.
    pub fn new(
        code_point: impl Into<String>,
        name: impl Into<String>,
        block_name: impl Into<String>,
        aliases: Vec<String>,
    ) -> Result<Self, CoreError> {
        let code_point = code_point.into();
        let name = name.into();
        let block_name = block_name.into();

        for (field, value) in [
            ("code_point", &code_point),
            ("name", &name),
            ("block_name", &block_name),
        ] {
            if value.is_empty() {
                return Err(CoreError::EmptyField {
                    field,
                    code_point: code_point.clone(),
                });
            }
        }

        let value = parse_code_point(&code_point)?;
        let aliases = dedup_preserving_order(aliases);
        let prefixed = format!("U+{code_point}");

        let mut terms = Vec::with_capacity(aliases.len() + 2);
        terms.push(prefixed.clone());
        terms.push(name.clone());
        terms.extend(aliases.iter().cloned());
        // Le bloc n'entre pas dans la recherche : il dégrade le classement.
        let search_text = dedup_preserving_order(terms).join(" ").to_uppercase();

        Ok(Self {
            code_point,
            name,
            block_name,
            aliases,
            value,
            prefixed,
            character: char::from_u32(value),
            search_text,
        })
    }

    /// Bare code point, ex. `"0041"`.
    #[must_use]
    pub fn code_point(&self) -> &str {
        &self.code_point
    }

    /// Nom canonique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nom du bloc contenant.
    #[must_use]
    pub fn block_name(&self) -> &str {
        &self.block_name
    }

    /// Alias uniques, dans l'ordre source.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Numeric code point value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Display form, ex. `"U+0041"`.
    #[must_use]
    pub fn prefixed_code_point(&self) -> &str {
        &self.prefixed
    }

    /// Decoded scalar. `None` only for surrogate code points.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Uppercase `prefixed name aliases...` string fed to fuzzy matchers.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - '{}' ({})", self.prefixed, self.name, self.block_name)
    }
}
