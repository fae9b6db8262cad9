//! MCP tool implementations.
//!
//! Each tool answers one dashboard question against the shared dataset.

pub mod country_wins;
pub mod final_result;
pub mod list_options;
pub mod win_map;

pub use country_wins::CountryWinsParams;
pub use final_result::FinalResultParams;
pub use win_map::WinMapParams;

use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;

/// Wrap a serializable output as pretty JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(output)
        .map_err(|e| McpError::internal_error(format!("failed to serialize output: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
