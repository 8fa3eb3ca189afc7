/// `<block first-cp="0000" last-cp="007F" name="Basic Latin"/>`, attributes verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
    pub first_cp: String,
    pub last_cp: String,
    pub name: String,
}

/// `<name-alias alias="..." type="..."/>` child of a `<char>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAlias {
    /// `alias` attribute. `None` if the entry is malformed.
    pub alias: Option<String>,
    /// `type` attribute (`correction`, `control`, `figment`, ...).
    pub kind: Option<String>,
}

/// Attributs bruts d'un `<char>`.
///
/// Tous optionnels : les plages (`first-cp`/`last-cp`, ex. zone à usage privé)
/// n'ont pas de `cp`, et l'absence d'un attribut requis est décidée plus
/// loin, par le constructeur de records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawChar {
    /// `cp`, hex sans préfixe.
    pub cp: Option<String>,
    /// `na`, nom principal (vide pour les contrôles et les noms Unicode 1.0).
    pub na: Option<String>,
    /// `na1`, nom Unicode 1.0.
    pub na1: Option<String>,
    /// `age`, version d'assignation, ex. `"1.1"`.
    pub age: Option<String>,
    /// `blk`, nom court du bloc, ex. `"ASCII"`, `"PUA"`.
    pub blk: Option<String>,
    /// Tous les enfants `name-alias`, dans l'ordre du document.
    pub aliases: Vec<RawAlias>,
}

/// One child of `<repertoire>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawEntry {
    /// `<char>` in the UCD namespace.
    Char(RawChar),
    /// `<reserved>`, `<noncharacter>`, `<surrogate>`, or anything else.
    Other {
        /// Local tag name.
        tag: String,
    },
}

/// Owned view of the parts of the UCD document the pipeline reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UcdDocument {
    /// Texte de `<description>`, ex. `"Unicode 15.0.0"`.
    pub description: Option<String>,
    /// `<repertoire>` children, in document order.
    pub entries: Vec<RawEntry>,
    /// `<blocks>` children, in document order.
    pub blocks: Vec<RawBlock>,
}
