//! Turns raw response values into typed symbols and locations.
//!
//! A `null` result or a non-array result means "nothing found". Array
//! elements that fit neither expected shape are dropped one by one so a
//! single odd entry never hides the rest of the response.

use lsp_types::{Location, Range, SymbolKind};
use serde::Deserialize;
use serde_json::Value;
use symgather_api::{FlatSymbol, HierarchicalSymbol, Symbol};
use tracing::debug;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHierarchicalSymbol {
    name: String,
    #[serde(default)]
    detail: Option<String>,
    kind: SymbolKind,
    range: Range,
    selection_range: Range,
    #[serde(default)]
    children: Option<Value>,
}

pub fn normalize_symbols(response: Value) -> Vec<Symbol> {
    match response {
        Value::Null => Vec::new(),
        Value::Array(items) => symbols_from_values(items),
        other => {
            debug!("ignoring non-array symbol response: {}", other);
            Vec::new()
        }
    }
}

pub fn normalize_locations(response: Value) -> Vec<Location> {
    match response {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Location>(item) {
                Ok(location) => Some(location),
                Err(e) => {
                    debug!("skipping malformed location: {}", e);
                    None
                }
            })
            .collect(),
        other => {
            debug!("ignoring non-array location response: {}", other);
            Vec::new()
        }
    }
}

fn symbols_from_values(items: Vec<Value>) -> Vec<Symbol> {
    items.into_iter().filter_map(symbol_from_value).collect()
}

fn children_from_value(value: Value) -> Option<Vec<Symbol>> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(symbols_from_values(items)),
        other => {
            debug!("ignoring non-array children: {}", other);
            None
        }
    }
}

/// A symbol is hierarchical iff it carries `range` directly; flat symbols
/// nest their range inside `location`.
fn symbol_from_value(value: Value) -> Option<Symbol> {
    if value.get("range").is_some() {
        match serde_json::from_value::<RawHierarchicalSymbol>(value) {
            Ok(raw) => Some(Symbol::Hierarchical(HierarchicalSymbol {
                name: raw.name,
                detail: raw.detail,
                kind: raw.kind,
                range: raw.range,
                selection_range: raw.selection_range,
                children: raw.children.and_then(children_from_value),
            })),
            Err(e) => {
                debug!("skipping malformed document symbol: {}", e);
                None
            }
        }
    } else if value.get("location").is_some() {
        match serde_json::from_value::<FlatSymbol>(value) {
            Ok(symbol) => Some(Symbol::Flat(symbol)),
            Err(e) => {
                debug!("skipping malformed symbol information: {}", e);
                None
            }
        }
    } else {
        debug!("skipping symbol of unknown shape: {}", value);
        None
    }
}
