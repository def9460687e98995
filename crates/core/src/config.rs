use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentSymbolConfig {
    /// Only ask clients with this name. Empty means "use the default".
    pub client_name: String,
    pub display_container_name: bool,
    /// Column width of the symbol name when a container is appended.
    pub symbol_name_width: usize,
}

impl Default for DocumentSymbolConfig {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            display_container_name: false,
            symbol_name_width: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferencesConfig {
    pub client_name: String,
    pub include_declaration: bool,
    /// Attach the source line of each reference.
    pub show_line: bool,
    pub location_padding_width: usize,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            include_declaration: true,
            show_line: false,
            location_padding_width: 30,
        }
    }
}

/// Host wide settings shared by every source.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GatherSettings {
    pub default_client_name: Option<String>,
}

impl GatherSettings {
    /// Effective client filter: the source value, else the host default.
    pub fn client_filter(&self, source_client_name: &str) -> Option<String> {
        if !source_client_name.is_empty() {
            return Some(source_client_name.to_string());
        }
        self.default_client_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

pub fn from_json<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(serde_json::from_value(value)?)
}
