use std::collections::HashMap;

use crate::error::CoreError;
use crate::record::{CharacterRecord, MAX_CODE_POINT};

/// Ensemble ordonné de caractères avec index par code point.
///
/// Garde l'ordre d'insertion (ordre du fichier source) pour les consommateurs
/// positionnels, et un index `"U+XXXX"` → position pour les recherches exactes.
/// Aucune mutation après la phase de construction : les consommateurs ne
/// reçoivent que `&CharacterTable`.
///
/// # Example
/// ```
/// use gx_core::record::CharacterRecord;
/// use gx_core::table::CharacterTable;
///
/// let mut table = CharacterTable::new();
/// table.insert(CharacterRecord::new("0041", "LATIN CAPITAL LETTER A", "Basic Latin", vec![]).unwrap());
/// assert_eq!(table.get("U+0041").unwrap().name(), "LATIN CAPITAL LETTER A");
/// assert_eq!(table.get("0041").unwrap().name(), "LATIN CAPITAL LETTER A");
/// assert_eq!(table.get_char('A').unwrap().code_point(), "0041");
/// assert!(table.get("U+0042").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterTable {
    records: Vec<CharacterRecord>,
    index: HashMap<String, usize>,
}

impl CharacterTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the end, or replace the record with the same code
    /// point value in place (keeping its original position). `"0041"` and
    /// `"00041"` are the same code point.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, record: CharacterRecord) -> Option<CharacterRecord> {
        let key = canonical_key(record.value());
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.records[pos], record));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        None
    }

    /// Look up by `"U+0041"`, `"u+0041"` or bare `"0041"`.
    ///
    /// # Errors
    /// `CoreError::NotFound` if the key is not a code point or is absent.
    pub fn get(&self, key: &str) -> Result<&CharacterRecord, CoreError> {
        normalize_key(key)
            .and_then(|k| self.index.get(&k))
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| CoreError::NotFound {
                key: key.to_string(),
            })
    }

    /// Look up the record of a single character.
    ///
    /// # Errors
    /// `CoreError::NotFound` if the character has no record.
    pub fn get_char(&self, c: char) -> Result<&CharacterRecord, CoreError> {
        let key = canonical_key(u32::from(c));
        self.index
            .get(&key)
            .map(|&pos| &self.records[pos])
            .ok_or(CoreError::NotFound { key })
    }

    /// Résout chaque caractère de `text`.
    ///
    /// # Errors
    /// `CoreError::NotFound` au premier caractère inconnu.
    pub fn describe_text(&self, text: &str) -> Result<TextDescription<'_>, CoreError> {
        let records = text
            .chars()
            .map(|c| self.get_char(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TextDescription { records })
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&CharacterRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CharacterRecord> {
        self.records.last()
    }
}

impl FromIterator<CharacterRecord> for CharacterTable {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl<'a> IntoIterator for &'a CharacterTable {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `"u+41"`, `"0041"`, `"U+0041"` → `"U+0041"`.
fn normalize_key(key: &str) -> Option<String> {
    let hex = key
        .strip_prefix("U+")
        .or_else(|| key.strip_prefix("u+"))
        .unwrap_or(key);
    if hex.is_empty() || hex.len() > 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    (value <= MAX_CODE_POINT).then(|| canonical_key(value))
}

/// Clé d'index : `U+` + hex majuscule sur au moins 4 chiffres, quel que soit
/// le remplissage du `cp` source.
fn canonical_key(value: u32) -> String {
    format!("U+{value:04X}")
}

/// Résultat de [`CharacterTable::describe_text`].
#[derive(Debug)]
pub struct TextDescription<'a> {
    pub records: Vec<&'a CharacterRecord>,
}

impl TextDescription<'_> {
    /// `"U+0061 U+0062"`.
    #[must_use]
    pub fn code_points(&self) -> String {
        self.records
            .iter()
            .map(|r| r.prefixed_code_point())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `"a(U+0061) b(U+0062)"`.
    #[must_use]
    pub fn annotated(&self) -> String {
        self.records
            .iter()
            .map(|r| {
                let c = r.character().map(String::from).unwrap_or_default();
                format!("{c}({})", r.prefixed_code_point())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
