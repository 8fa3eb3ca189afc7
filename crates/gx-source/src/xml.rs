use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::SourceError;
use crate::raw::{RawAlias, RawBlock, RawChar, RawEntry, UcdDocument};

/// Namespace of every element in the UCD XML schema.
pub const UCD_NS: &str = "http://www.unicode.org/ns/2003/ucd/1.0";

/// Lit et analyse un fichier UCD XML.
///
/// # Errors
/// `SourceError::Io` si le fichier est illisible, sinon voir [`parse_document`].
///
/// # Example
/// ```no_run
/// use gx_source::read_document;
/// use std::path::Path;
/// let doc = read_document(Path::new("original_data/ucd.all.flat.xml")).unwrap();
/// println!("{} blocs", doc.blocks.len());
/// ```
pub fn read_document(path: &Path) -> Result<UcdDocument, SourceError> {
    let input = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Lecture de {} ({} octets)", path.display(), input.len());
    parse_document(&input)
}

/// Parse a UCD XML document into owned raw entries.
///
/// Sections are located by qualified tag name, not by position.
///
/// # Errors
/// `SourceError::Xml` for malformed XML, `SourceError::MissingSection` if
/// `<repertoire>` or `<blocks>` is absent, `SourceError::MissingBlockAttribute`
/// for an incomplete `<block>`.
///
/// # Example
/// ```
/// use gx_source::{parse_document, RawEntry};
/// let xml = r#"<ucd xmlns="http://www.unicode.org/ns/2003/ucd/1.0">
///   <repertoire><char cp="0041" na="LATIN CAPITAL LETTER A" age="1.1" na1="" blk="ASCII"/></repertoire>
///   <blocks><block first-cp="0000" last-cp="007F" name="Basic Latin"/></blocks>
/// </ucd>"#;
/// let doc = parse_document(xml).unwrap();
/// assert_eq!(doc.blocks[0].name, "Basic Latin");
/// assert!(matches!(&doc.entries[0], RawEntry::Char(c) if c.cp.as_deref() == Some("0041")));
/// ```
pub fn parse_document(input: &str) -> Result<UcdDocument, SourceError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(input, options)?;
    let root = doc.root_element();

    let description = section(root, "description")
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let repertoire = section(root, "repertoire").ok_or(SourceError::MissingSection("repertoire"))?;
    let blocks = section(root, "blocks").ok_or(SourceError::MissingSection("blocks"))?;

    let blocks = blocks
        .children()
        .filter(Node::is_element)
        .enumerate()
        .map(|(index, node)| read_block(node, index))
        .collect::<Result<Vec<_>, _>>()?;

    let entries: Vec<RawEntry> = repertoire
        .children()
        .filter(Node::is_element)
        .map(read_entry)
        .collect();

    log::debug!(
        "Document UCD : {} entrées, {} blocs",
        entries.len(),
        blocks.len()
    );

    Ok(UcdDocument {
        description,
        entries,
        blocks,
    })
}

fn section<'a, 'input>(root: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    root.children().find(|n| n.has_tag_name((UCD_NS, name)))
}

fn read_block(node: Node<'_, '_>, index: usize) -> Result<RawBlock, SourceError> {
    let attr = |attribute: &'static str| {
        node.attribute(attribute)
            .map(str::to_string)
            .ok_or(SourceError::MissingBlockAttribute { attribute, index })
    };
    Ok(RawBlock {
        first_cp: attr("first-cp")?,
        last_cp: attr("last-cp")?,
        name: attr("name")?,
    })
}

fn read_entry(node: Node<'_, '_>) -> RawEntry {
    if !node.has_tag_name((UCD_NS, "char")) {
        return RawEntry::Other {
            tag: node.tag_name().name().to_string(),
        };
    }

    let attr = |name: &str| node.attribute(name).map(str::to_string);

    // Tout enfant `name-alias`, quel que soit son type.
    let aliases = node
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "name-alias")
        .map(|c| RawAlias {
            alias: c.attribute("alias").map(str::to_string),
            kind: c.attribute("type").map(str::to_string),
        })
        .collect();

    RawEntry::Char(RawChar {
        cp: attr("cp"),
        na: attr("na"),
        na1: attr("na1"),
        age: attr("age"),
        blk: attr("blk"),
        aliases,
    })
}
