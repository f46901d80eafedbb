//! CalculateFinancialsHandler - Break-even and profit from three inputs.

use tracing::debug;

use crate::domain::foundation::ValidationError;
use crate::domain::toolkit::{calculate_financials, FinancialInputs, FinancialSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateFinancialsHandler;

impl CalculateFinancialsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, inputs: FinancialInputs) -> Result<FinancialSummary, ValidationError> {
        let summary = calculate_financials(&inputs)?;
        debug!(
            monthly_profit = summary.monthly_profit,
            break_even = %summary.break_even,
            "Financials calculated"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toolkit::BreakEven;

    #[test]
    fn computes_break_even() {
        let summary = CalculateFinancialsHandler::new()
            .handle(FinancialInputs {
                startup_costs: Some(10_000.0),
                monthly_expenses: Some(2_000.0),
                expected_revenue: Some(5_000.0),
            })
            .unwrap();
        assert_eq!(summary.monthly_profit_display(), "$3000.00");
        assert_eq!(summary.break_even_display(), "3.3 months");
        assert_eq!(summary.annual_profit_display(), "$36000.00");
    }

    #[test]
    fn missing_inputs_count_as_zero() {
        let summary = CalculateFinancialsHandler::new()
            .handle(FinancialInputs::default())
            .unwrap();
        assert_eq!(summary.break_even, BreakEven::NotReached);
    }

    #[test]
    fn negative_input_is_rejected() {
        let err = CalculateFinancialsHandler::new()
            .handle(FinancialInputs {
                monthly_expenses: Some(-1.0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.field(), "monthlyExpenses");
    }
}
