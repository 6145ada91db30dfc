//! Rendering of allocation results.

use std::fmt::Write as _;

use deposit_allocator_core::errors::{Error, Result};
use deposit_allocator_core::utils::amount_utils::to_display_amount;
use deposit_allocator_core::DepositAllocationResult;

use crate::config::OutputFormat;

pub fn render(result: &DepositAllocationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// One `portfolio: amount` line per portfolio, amounts rounded to cents.
fn render_text(result: &DepositAllocationResult) -> Result<String> {
    let mut out = String::new();
    for (portfolio, amount) in &result.allocations {
        let amount = to_display_amount(*amount)?;
        writeln!(out, "{}: {:.2}", portfolio, amount)
            .map_err(|e| Error::Unexpected(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deposit_allocator_core::PortfolioAmounts;

    fn result_with(entries: &[(&str, f64)]) -> DepositAllocationResult {
        let allocations: PortfolioAmounts = entries
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect();
        DepositAllocationResult {
            total_deposited: allocations.values().sum(),
            allocations,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_text_sorted_and_rounded() {
        let result = result_with(&[("Retirement", 433.3333333), ("High risk", 766.6666667)]);
        assert_eq!(
            render(&result, OutputFormat::Text).unwrap(),
            "High risk: 766.67\nRetirement: 433.33\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(
            render(&DepositAllocationResult::default(), OutputFormat::Text).unwrap(),
            ""
        );
    }

    #[test]
    fn test_render_text_rejects_nan() {
        let result = result_with(&[("High risk", f64::NAN)]);
        assert!(render(&result, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_render_json() {
        let result = result_with(&[("High risk", 75.0)]);
        let value: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["allocations"]["High risk"], 75.0);
        assert_eq!(value["totalDeposited"], 75.0);
    }
}
