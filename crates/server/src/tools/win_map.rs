//! win_map tool implementation.
//!
//! Returns the Plotly choropleth figure the dashboard draws.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cupdash_core::Dataset;
use cupdash_core::dashboard::win_map_figure;

use super::json_result;

/// Input parameters for win_map tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WinMapParams {
    /// Currently selected country; does not change the figure.
    #[serde(default)]
    pub country: Option<String>,
}

/// Implementation of the win_map tool.
pub async fn win_map_impl(dataset: &Dataset, params: WinMapParams) -> Result<CallToolResult, McpError> {
    json_result(&win_map_figure(dataset, params.country.as_deref()))
}
