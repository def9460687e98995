//! Flattens document symbol trees into records.

use symgather_api::{
    ActionData, ItemContext, Record, RecordData, Symbol, Target, ValidityPredicate, kind_name,
};

const KIND_COLUMN_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    pub display_container_name: bool,
    pub symbol_name_width: usize,
}

/// Accumulated state handed from a symbol to its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ancestry {
    /// Ancestor names, outermost first.
    pub path: Vec<String>,
    /// Dotted qualified name of the innermost ancestor, empty at the root.
    pub display_name: String,
}

impl Ancestry {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// State seen by the children of `name`.
    pub fn descend(&self, name: &str) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        let display_name = if self.display_name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.display_name, name)
        };
        Self { path, display_name }
    }
}

/// Pre-order flattening of `symbols`. Records rejected by `validity` are
/// dropped but their children are still visited.
pub fn flatten_symbols(
    symbols: &[Symbol],
    ancestry: &Ancestry,
    context: &ItemContext,
    options: &FlattenOptions,
    validity: &dyn ValidityPredicate,
) -> Vec<Record> {
    let mut records = Vec::new();
    for symbol in symbols {
        let container = container_label(symbol, ancestry, options);
        let record = symbol_to_record(symbol, ancestry, context, options, container);
        if validity.is_valid(&record) {
            records.push(record);
        }

        if let Symbol::Hierarchical(hierarchical) = symbol {
            if let Some(children) = &hierarchical.children {
                let child_ancestry = ancestry.descend(&hierarchical.name);
                records.extend(flatten_symbols(
                    children,
                    &child_ancestry,
                    context,
                    options,
                    validity,
                ));
            }
        }
    }
    records
}

/// Hierarchical symbols show their parent's qualified name; flat symbols
/// show the container the server reported.
fn container_label<'a>(
    symbol: &'a Symbol,
    ancestry: &'a Ancestry,
    options: &FlattenOptions,
) -> Option<&'a str> {
    if !options.display_container_name {
        return None;
    }
    let label = match symbol {
        Symbol::Hierarchical(_) => Some(ancestry.display_name.as_str()),
        Symbol::Flat(flat) => flat.container_name.as_deref(),
    };
    label.filter(|l| !l.is_empty())
}

fn symbol_to_record(
    symbol: &Symbol,
    ancestry: &Ancestry,
    context: &ItemContext,
    options: &FlattenOptions,
    container: Option<&str>,
) -> Record {
    let target = match symbol {
        Symbol::Hierarchical(s) => Target::Buffer {
            bufnr: context.bufnr,
            range: s.selection_range,
        },
        Symbol::Flat(s) => Target::File {
            path: crate::util::uri_to_path(&s.location.uri),
            range: s.location.range,
        },
    };

    Record {
        word: symbol_label(symbol, container, options.symbol_name_width),
        level: ancestry.depth(),
        tree_path: ancestry.path.clone(),
        is_tree: false,
        is_expanded: false,
        action: ActionData {
            target,
            context: context.clone(),
        },
        line_text: None,
        data: RecordData::Symbol(symbol.clone()),
    }
}

pub fn symbol_label(symbol: &Symbol, container: Option<&str>, name_width: usize) -> String {
    let kind = format!("[{}]", kind_name(symbol.kind()));
    let name = match container {
        Some(container) => format!("{:<name_width$} [{container}]", symbol.name()),
        None => symbol.name().to_string(),
    };
    format!("{kind:<KIND_COLUMN_WIDTH$} {name}")
}
