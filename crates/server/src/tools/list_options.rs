//! list_options tool implementation.

use rmcp::{ErrorData as McpError, model::*};

use cupdash_core::Dataset;
use cupdash_core::dashboard::dropdown_options;

use super::json_result;

/// Implementation of the list_options tool.
pub async fn list_options_impl(dataset: &Dataset) -> Result<CallToolResult, McpError> {
    json_result(&dropdown_options(dataset))
}
