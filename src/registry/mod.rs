//! Configuration registry: tool id -> compiled-in tool configuration

mod nda;
mod rental;
mod will;

use crate::state::ToolConfiguration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no document tool named `{0}`")]
    NotFound(String),
}

/// Read-only set of document tools, in display order
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolConfiguration>,
}

impl ToolRegistry {
    /// Registry with every built-in document tool
    pub fn builtin() -> Self {
        Self::from_tools(vec![will::tool(), nda::tool(), rental::tool()])
    }

    pub fn from_tools(tools: Vec<ToolConfiguration>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[ToolConfiguration] {
        &self.tools
    }

    pub fn lookup(&self, id: &str) -> Result<&ToolConfiguration, RegistryError> {
        self.tools
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Condition helper: top-level string field equals `expected`
fn top_level_is(tree: &serde_json::Value, key: &str, expected: &str) -> bool {
    tree.get(key).and_then(serde_json::Value::as_str) == Some(expected)
}
