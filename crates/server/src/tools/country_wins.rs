//! country_wins tool implementation.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cupdash_core::dashboard::{TextOutput, country_wins_text};
use cupdash_core::{Dataset, Error};

use super::json_result;

/// Input parameters for country_wins tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CountryWinsParams {
    /// Country name as it appears in the winners column (e.g. "Brazil").
    pub country: String,
}

pub fn country_wins_output(dataset: &Dataset, params: &CountryWinsParams) -> Result<TextOutput, Error> {
    let country = params.country.trim();
    if country.is_empty() {
        return Err(Error::InvalidInput("country cannot be empty".into()));
    }
    Ok(country_wins_text(dataset, Some(country)).into())
}

/// Implementation of the country_wins tool.
pub async fn country_wins_impl(dataset: &Dataset, params: CountryWinsParams) -> Result<CallToolResult, McpError> {
    let output = country_wins_output(dataset, &params)?;
    json_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupdash_core::FinalRecord;

    fn dataset() -> Dataset {
        Dataset::build(
            Vec::new(),
            vec![FinalRecord::new("1958", "Brazil", "Sweden"), FinalRecord::new("1962", "Brazil", "Czechoslovakia")],
            "fixture",
        )
    }

    #[test]
    fn test_country_wins_output() {
        let out = country_wins_output(&dataset(), &CountryWinsParams { country: " Brazil ".into() }).unwrap();
        assert_eq!(out.text, "Brazil has won the World Cup 2 time(s).");
    }

    #[tokio::test]
    async fn test_country_wins_empty_country() {
        let result = country_wins_impl(&dataset(), CountryWinsParams { country: "  ".into() }).await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code.0, -32602);
    }

    #[tokio::test]
    async fn test_country_wins_success() {
        let result = country_wins_impl(&dataset(), CountryWinsParams { country: "Sweden".into() }).await;
        assert!(result.is_ok());
    }
}
