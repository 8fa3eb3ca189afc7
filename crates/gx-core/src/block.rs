use std::fmt;

use crate::error::CoreError;

/// Named, contiguous range of code points.
///
/// # Example
/// ```
/// use gx_core::block::Block;
/// let block = Block::new(0x0000, 0x007F, "Basic Latin").unwrap();
/// assert!(block.contains(0x41));
/// assert_eq!(block.to_string(), "U+0..U+7F - Basic Latin (CP: 127)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    first_code_point: u32,
    last_code_point: u32,
    name: String,
}

impl Block {
    /// Build a block, checking `first_code_point <= last_code_point`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidBlockRange` if the range is inverted.
    pub fn new(first: u32, last: u32, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if first > last {
            return Err(CoreError::InvalidBlockRange { name, first, last });
        }
        Ok(Self {
            first_code_point: first,
            last_code_point: last,
            name,
        })
    }

    /// Premier code point inclus.
    #[must_use]
    pub fn first_code_point(&self) -> u32 {
        self.first_code_point
    }

    /// Dernier code point inclus.
    #[must_use]
    pub fn last_code_point(&self) -> u32 {
        self.last_code_point
    }

    /// Nom du bloc, ex. "Basic Latin".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if `code_point` lies within the inclusive range.
    #[inline]
    #[must_use]
    pub fn contains(&self, code_point: u32) -> bool {
        self.first_code_point <= code_point && code_point <= self.last_code_point
    }

    /// `true` if both ranges share at least one code point.
    #[must_use]
    pub fn overlaps(&self, other: &Block) -> bool {
        self.first_code_point <= other.last_code_point
            && other.first_code_point <= self.last_code_point
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U+{:X}..U+{:X} - {} (CP: {})",
            self.first_code_point,
            self.last_code_point,
            self.name,
            self.last_code_point - self.first_code_point
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        let err = Block::new(0x80, 0x7F, "Broken").unwrap_err();
        assert!(matches!(err, CoreError::InvalidBlockRange { first: 0x80, last: 0x7F, .. }));
    }

    #[test]
    fn single_point_block_contains_itself() {
        let block = Block::new(0x10, 0x10, "Tiny").unwrap();
        assert!(block.contains(0x10));
        assert!(!block.contains(0x11));
        assert!(!block.contains(0x0F));
    }

    #[test]
    fn accessors_and_display() {
        let block = Block::new(0x2000, 0x206F, "General Punctuation").unwrap();
        assert_eq!(block.first_code_point(), 0x2000);
        assert_eq!(block.last_code_point(), 0x206F);
        assert_eq!(block.name(), "General Punctuation");
        assert_eq!(block.to_string(), "U+2000..U+206F - General Punctuation (CP: 111)");

        let tiny = Block::new(0x10_FFFF, 0x10_FFFF, "Last").unwrap();
        assert_eq!(tiny.to_string(), "U+10FFFF..U+10FFFF - Last (CP: 0)");
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Block::new(0x00, 0x7F, "A").unwrap();
        let b = Block::new(0x7F, 0xFF, "B").unwrap();
        let c = Block::new(0x100, 0x17F, "C").unwrap();
        assert!(a.overlaps(&b) && b.overlaps(&a));
        assert!(!a.overlaps(&c) && !c.overlaps(&a));
    }
}
