use gx_core::Block;
use gx_source::RawBlock;

use crate::error::IngestError;

/// Blocs triés par premier code point, avec recherche par contenance.
///
/// Les chevauchements ne sont pas corrigés : le premier bloc trié qui
/// contient le code point gagne, et chaque chevauchement est signalé par un
/// `warn!` à la construction.
///
/// # Example
/// ```
/// use gx_core::Block;
/// use gx_ingest::BlockIndex;
///
/// let index = BlockIndex::from_blocks(vec![
///     Block::new(0x0080, 0x00FF, "Latin-1 Supplement").unwrap(),
///     Block::new(0x0000, 0x007F, "Basic Latin").unwrap(),
/// ]);
/// assert_eq!(index.blocks()[0].name(), "Basic Latin");
/// assert_eq!(index.lookup(0xE9).unwrap().name(), "Latin-1 Supplement");
/// assert!(index.lookup(0x100).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockIndex {
    blocks: Vec<Block>,
}

impl BlockIndex {
    /// Parse raw `<block>` entries and sort them.
    ///
    /// An empty input yields an empty index; see [`BlockIndex::lookup`].
    ///
    /// # Errors
    /// `IngestError::InvalidBlockBound` for a non-hex bound,
    /// `IngestError::Record` for an inverted range.
    pub fn build(raw: &[RawBlock]) -> Result<Self, IngestError> {
        let blocks = raw
            .iter()
            .map(|b| {
                let first = parse_bound(&b.first_cp, &b.name)?;
                let last = parse_bound(&b.last_cp, &b.name)?;
                let block = Block::new(first, last, b.name.clone())?;
                log::debug!("Bloc : {block}");
                Ok(block)
            })
            .collect::<Result<Vec<_>, IngestError>>()?;
        Ok(Self::from_blocks(blocks))
    }

    /// Sort already-parsed blocks (stable on `first_code_point`).
    #[must_use]
    pub fn from_blocks(mut blocks: Vec<Block>) -> Self {
        blocks.sort_by_key(Block::first_code_point);
        let index = Self { blocks };
        for (a, b) in index.overlaps() {
            log::warn!(
                "Blocs chevauchants : {} / {} (le premier l'emporte)",
                index.blocks[a],
                index.blocks[b]
            );
        }
        index
    }

    /// First block, in index order, whose range contains `code_point`.
    ///
    /// # Errors
    /// `IngestError::BlockNotFound` if none does, including on an empty index.
    pub fn lookup(&self, code_point: u32) -> Result<&Block, IngestError> {
        let end = self
            .blocks
            .partition_point(|b| b.first_code_point() <= code_point);
        self.blocks[..end]
            .iter()
            .find(|b| b.contains(code_point))
            .ok_or(IngestError::BlockNotFound { code_point })
    }

    /// Pairs of positions `(earlier, later)` whose ranges overlap.
    #[must_use]
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (j, later) in self.blocks.iter().enumerate() {
            for (i, earlier) in self.blocks[..j].iter().enumerate() {
                if earlier.overlaps(later) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn parse_bound(value: &str, name: &str) -> Result<u32, IngestError> {
    u32::from_str_radix(value, 16).map_err(|_| IngestError::InvalidBlockBound {
        name: name.to_string(),
        value: value.to_string(),
    })
}
