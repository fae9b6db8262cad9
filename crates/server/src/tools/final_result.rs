//! final_result tool implementation.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cupdash_core::dashboard::{TextOutput, final_result_text};
use cupdash_core::{Dataset, Error};

use super::json_result;

/// Input parameters for final_result tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FinalResultParams {
    /// Year label of the final (e.g. "1930").
    pub year: String,
}

/// Unknown years produce an empty sentence, matching the dashboard.
pub fn final_result_output(dataset: &Dataset, params: &FinalResultParams) -> Result<TextOutput, Error> {
    let year = params.year.trim();
    if year.is_empty() {
        return Err(Error::InvalidInput("year cannot be empty".into()));
    }
    Ok(final_result_text(dataset, Some(year)).into())
}

/// Implementation of the final_result tool.
pub async fn final_result_impl(dataset: &Dataset, params: FinalResultParams) -> Result<CallToolResult, McpError> {
    let output = final_result_output(dataset, &params)?;
    json_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupdash_core::FinalRecord;

    fn dataset() -> Dataset {
        Dataset::build(Vec::new(), vec![FinalRecord::new("2010", "Spain", "Netherlands")], "fixture")
    }

    #[test]
    fn test_final_result_output() {
        let out = final_result_output(&dataset(), &FinalResultParams { year: "2010".into() }).unwrap();
        assert_eq!(out.text, "2010 -> Winner = Spain, Runner-up = Netherlands");
    }

    #[test]
    fn test_final_result_unknown_year() {
        let out = final_result_output(&dataset(), &FinalResultParams { year: "2011".into() }).unwrap();
        assert_eq!(out.text, "");
    }

    #[tokio::test]
    async fn test_final_result_empty_year() {
        let result = final_result_impl(&dataset(), FinalResultParams { year: String::new() }).await;
        assert!(result.is_err());
    }
}
