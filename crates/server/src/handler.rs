//! MCP server handler implementation.
//!
//! Exposes the dashboard callbacks as tools over stdio.
use std::sync::Arc;

use crate::tools::{
    CountryWinsParams, FinalResultParams, WinMapParams, country_wins::country_wins_impl,
    final_result::final_result_impl, list_options::list_options_impl, win_map::win_map_impl,
};

use cupdash_core::Dataset;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// MCP handler over the loaded finals dataset.
#[derive(Clone)]
pub struct CupDashServer {
    dataset: Arc<Dataset>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CupDashServer {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset, tool_router: Self::tool_router() }
    }

    #[tool(description = "Choropleth figure (Plotly JSON) of World Cup wins by country.")]
    async fn win_map(&self, params: Parameters<WinMapParams>) -> Result<CallToolResult, McpError> {
        win_map_impl(&self.dataset, params.0).await
    }

    #[tool(description = "How many times a country has won the World Cup.")]
    async fn country_wins(&self, params: Parameters<CountryWinsParams>) -> Result<CallToolResult, McpError> {
        country_wins_impl(&self.dataset, params.0).await
    }

    #[tool(description = "Winner and runner-up of the World Cup final in a given year.")]
    async fn final_result(&self, params: Parameters<FinalResultParams>) -> Result<CallToolResult, McpError> {
        final_result_impl(&self.dataset, params.0).await
    }

    #[tool(description = "Selectable winners and years.")]
    async fn list_options(&self) -> Result<CallToolResult, McpError> {
        list_options_impl(&self.dataset).await
    }
}

impl ServerHandler for CupDashServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "cupdash".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_tools() {
        let server = CupDashServer::new(Arc::new(Dataset::build(Vec::new(), Vec::new(), "fixture")));
        let mut names: Vec<String> = server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["country_wins", "final_result", "list_options", "win_map"]);
    }

    #[test]
    fn test_server_info() {
        let server = CupDashServer::new(Arc::new(Dataset::build(Vec::new(), Vec::new(), "fixture")));
        assert_eq!(server.get_info().server_info.name, "cupdash");
    }
}
