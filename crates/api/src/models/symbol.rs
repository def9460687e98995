use lsp_types::{Location, Range, SymbolKind};
use serde::{Deserialize, Serialize};

/// Symbol nested inside its parent, positioned in the requesting buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalSymbol {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub kind: SymbolKind,
    pub range: Range,
    pub selection_range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Symbol>>,
}

/// Standalone symbol with its own location and an optional container label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlatSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

/// One element of a document symbol response.
///
/// The protocol tells the two shapes apart only by field presence; the
/// normalizer resolves that once and the rest of the crate matches on
/// the variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Symbol {
    Hierarchical(HierarchicalSymbol),
    Flat(FlatSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Hierarchical(s) => &s.name,
            Symbol::Flat(s) => &s.name,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Hierarchical(s) => s.kind,
            Symbol::Flat(s) => s.kind,
        }
    }
}
