use serde_derive::Serialize;

use super::{month_bucket::BalancedMonth, reports::AverageIncomePolicy, user::UserId};

/// Result of one aggregation pass over a user's records: every month that
/// has records, oldest first, each with its cumulative balance.
///
/// Every report is a projection of `months`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryLedger {
    pub user_id: UserId,
    pub months: Vec<BalancedMonth>,
    #[serde(skip)]
    pub(crate) average_policy: AverageIncomePolicy,
}
