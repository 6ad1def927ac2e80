//! Budget types and the aggregate summary derived from them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single budgeted expense owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique item identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Expense category (e.g. "catering", "music")
    pub category: String,
    /// Optional description
    pub description: Option<String>,
    /// Estimated cost, non-negative
    pub estimated: f64,
    /// Actual cost once known
    pub actual: Option<f64>,
    /// Whether the expense has been paid
    pub paid: bool,
}

/// Per-user budget settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Owning user
    pub user_id: Uuid,
    /// Total budget the couple is working against
    pub total_budget: f64,
}

/// Payload for creating a budget item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudgetItem {
    /// Expense category
    pub category: String,
    /// Optional description
    pub description: Option<String>,
    /// Estimated cost, non-negative
    pub estimated: f64,
    /// Actual cost once known
    pub actual: Option<f64>,
    /// Whether the expense has been paid
    #[serde(default)]
    pub paid: bool,
}

/// Partial update for a budget item; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetItemUpdate {
    /// New category
    pub category: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New estimated cost
    pub estimated: Option<f64>,
    /// New actual cost
    pub actual: Option<f64>,
    /// New paid flag
    pub paid: Option<bool>,
}

/// Aggregates over the user's budget, recomputed on demand by linear scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The configured total budget
    pub total_budget: f64,
    /// Sum of estimated costs
    pub total_estimated: f64,
    /// Sum of actual costs where known
    pub total_actual: f64,
    /// Sum of actual (falling back to estimated) costs of paid items
    pub total_paid: f64,
    /// Total budget minus actual-or-estimated spend
    pub remaining: f64,
}

impl BudgetSummary {
    /// Compute the summary for a set of items against the user's settings.
    ///
    /// Where an item has no actual cost yet, its estimate stands in for it in
    /// the `remaining` calculation.
    pub fn compute(items: &[BudgetItem], settings: &BudgetSettings) -> Self {
        let total_estimated: f64 = items.iter().map(|i| i.estimated).sum();
        let total_actual: f64 = items.iter().filter_map(|i| i.actual).sum();
        let total_paid: f64 = items
            .iter()
            .filter(|i| i.paid)
            .map(|i| i.actual.unwrap_or(i.estimated))
            .sum();
        let committed: f64 = items.iter().map(|i| i.actual.unwrap_or(i.estimated)).sum();
        Self {
            total_budget: settings.total_budget,
            total_estimated,
            total_actual,
            total_paid,
            remaining: settings.total_budget - committed,
        }
    }
}
