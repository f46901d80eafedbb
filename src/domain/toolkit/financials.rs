//! Financial calculator - Monthly profit, break-even and annual profit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Calculator inputs in dollars. Missing values count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    #[serde(default)]
    pub startup_costs: Option<f64>,
    #[serde(default)]
    pub monthly_expenses: Option<f64>,
    #[serde(default)]
    pub expected_revenue: Option<f64>,
}

/// Months until startup costs are recovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "months")]
pub enum BreakEven {
    Months(f64),
    /// Monthly profit is zero or negative.
    NotReached,
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Months(m) => write!(f, "{:.1} months", m),
            BreakEven::NotReached => write!(f, "not reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub monthly_profit: f64,
    pub break_even: BreakEven,
    pub annual_profit: f64,
}

impl FinancialSummary {
    pub fn monthly_profit_display(&self) -> String {
        format_dollars(self.monthly_profit)
    }

    pub fn break_even_display(&self) -> String {
        self.break_even.to_string()
    }

    pub fn annual_profit_display(&self) -> String {
        format_dollars(self.annual_profit)
    }
}

/// Two-decimal dollar amount, e.g. "$3000.00" or "-$250.00".
pub fn format_dollars(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

fn read_input(field: &str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        None => Ok(0.0),
        Some(v) if !v.is_finite() => Err(ValidationError::invalid_format(field, "must be a finite number")),
        Some(v) if v < 0.0 => Err(ValidationError::out_of_range(field, 0.0, f64::MAX, v)),
        Some(v) => Ok(v),
    }
}

/// Computes the summary.
///
/// # Errors
///
/// Rejects negative or non-finite inputs.
pub fn calculate_financials(inputs: &FinancialInputs) -> Result<FinancialSummary, ValidationError> {
    let startup = read_input("startupCosts", inputs.startup_costs)?;
    let expenses = read_input("monthlyExpenses", inputs.monthly_expenses)?;
    let revenue = read_input("expectedRevenue", inputs.expected_revenue)?;

    let monthly_profit = revenue - expenses;
    let break_even = if monthly_profit > 0.0 {
        BreakEven::Months(startup / monthly_profit)
    } else {
        BreakEven::NotReached
    };

    Ok(FinancialSummary {
        monthly_profit,
        break_even,
        annual_profit: monthly_profit * 12.0,
    })
}
