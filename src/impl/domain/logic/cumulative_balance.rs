use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::{BalancedMonth, MonthBucket, MonthKey};

use super::utils::month_range;

pub(crate) struct CumulativeBalanceCalculator {
    buckets: Vec<MonthBucket>,
}

impl CumulativeBalanceCalculator {
    pub(crate) fn new(buckets: impl IntoIterator<Item = (MonthKey, MonthBucket)>) -> Self {
        let mut buckets: Vec<MonthBucket> = buckets.into_iter().map(|(_, b)| b).collect();
        // Oldest first. Stable, so equal keys keep their given order.
        buckets.sort_by_key(|b| b.key);
        Self { buckets }
    }

    /// Left-to-right fold: each month's cumulative balance is the sum of the
    /// monthly balances of itself and every earlier month.
    pub(crate) fn process(self) -> Vec<BalancedMonth> {
        self.buckets
            .into_iter()
            .scan(Decimal::ZERO, |running, bucket| {
                *running += bucket.monthly_balance;
                Some(BalancedMonth {
                    cumulative_balance: *running,
                    bucket,
                })
            })
            .collect()
    }
}

/// Annotates each bucket with its cumulative balance, ascending by month.
pub fn compute_cumulative(
    buckets: impl IntoIterator<Item = (MonthKey, MonthBucket)>,
) -> Vec<BalancedMonth> {
    CumulativeBalanceCalculator::new(buckets).process()
}

/// Inserts empty buckets for every month between the earliest and latest
/// bucket that has none, giving a continuous calendar axis. Empty buckets
/// carry the running balance through unchanged once folded.
pub fn fill_gaps(buckets: BTreeMap<MonthKey, MonthBucket>) -> BTreeMap<MonthKey, MonthBucket> {
    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return buckets;
    };
    let mut filled = buckets;
    for key in month_range(first, last) {
        filled.entry(key).or_insert_with(|| MonthBucket::empty(key));
    }
    filled
}
