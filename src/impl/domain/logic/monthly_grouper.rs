use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::{MonthBucket, MonthKey, Payment, WorkDay};

pub(crate) struct MonthlyGrouper<'a> {
    work_days: &'a [WorkDay],
    payments: &'a [Payment],
}

impl<'a> MonthlyGrouper<'a> {
    pub(crate) fn new(work_days: &'a [WorkDay], payments: &'a [Payment]) -> Self {
        Self {
            work_days,
            payments,
        }
    }

    /// Every record lands in exactly one bucket, keyed by the calendar month
    /// of its date. Months without records get no bucket; a month with only
    /// payments still gets one.
    pub(crate) fn process(self) -> BTreeMap<MonthKey, MonthBucket> {
        let mut partitions: BTreeMap<MonthKey, (Vec<WorkDay>, Vec<Payment>)> = BTreeMap::new();
        for work_day in self.work_days {
            partitions
                .entry(MonthKey::of(work_day.work_date))
                .or_default()
                .0
                .push(work_day.clone());
        }
        for payment in self.payments {
            partitions
                .entry(MonthKey::of(payment.payment_date))
                .or_default()
                .1
                .push(payment.clone());
        }

        partitions
            .into_iter()
            .map(|(key, (work_days, payments))| (key, MonthBucket::new(key, work_days, payments)))
            .collect()
    }
}

impl MonthBucket {
    /// Builds a bucket and its totals. Records are expected to fall within
    /// `key`; this is not checked.
    pub fn new(key: MonthKey, work_days: Vec<WorkDay>, payments: Vec<Payment>) -> Self {
        let total_salary: Decimal = work_days.iter().map(|d| d.salary).sum();
        let total_bonus: Decimal = work_days.iter().map(|d| d.bonus).sum();
        let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();
        Self {
            key,
            days_count: work_days.len(),
            total_salary,
            total_bonus,
            total_income: work_days.iter().map(WorkDay::income).sum(),
            total_paid,
            monthly_balance: total_salary - total_paid,
            work_days,
            payments,
        }
    }

    pub fn empty(key: MonthKey) -> Self {
        Self::new(key, Vec::new(), Vec::new())
    }
}

/// Partitions both record streams into calendar-month buckets.
pub fn group(work_days: &[WorkDay], payments: &[Payment]) -> BTreeMap<MonthKey, MonthBucket> {
    MonthlyGrouper::new(work_days, payments).process()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logic::test_fixtures::{money, payment, work_day};

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn test_group_empty_inputs() {
        assert!(group(&[], &[]).is_empty());
    }

    #[test]
    fn test_group_computes_month_totals() {
        let work_days = vec![
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-01-11", "1500.50", "250"),
            work_day("3", "2024-02-05", "1000", "100"),
        ];
        let payments = vec![
            payment("p1", "2024-01-20", "1200"),
            payment("p2", "2024-01-31", "300.25"),
        ];

        let buckets = group(&work_days, &payments);
        assert_eq!(buckets.len(), 2);

        let jan = &buckets[&key(2024, 1)];
        assert_eq!(jan.days_count, 2);
        assert_eq!(jan.total_salary, money("2500.50"));
        assert_eq!(jan.total_bonus, money("250"));
        assert_eq!(jan.total_income, money("2750.50"));
        assert_eq!(jan.total_paid, money("1500.25"));
        assert_eq!(jan.monthly_balance, money("1000.25"));
        assert_eq!(jan.payments.len(), 2);

        let feb = &buckets[&key(2024, 2)];
        assert_eq!(feb.days_count, 1);
        assert_eq!(feb.total_income, money("1100"));
        assert_eq!(feb.total_paid, Decimal::ZERO);
        assert_eq!(feb.monthly_balance, money("1000"));
    }

    #[test]
    fn test_bucket_income_sums_day_income() {
        let work_days = vec![
            work_day("1", "2024-01-10", "1000", "250.25"),
            work_day("2", "2024-01-11", "0", "99.75"),
        ];
        assert_eq!(work_days[0].income(), money("1250.25"));

        let bucket = MonthBucket::new(key(2024, 1), work_days, vec![]);
        assert_eq!(bucket.total_income, money("1350"));
        assert_eq!(bucket.total_income, bucket.total_salary + bucket.total_bonus);
    }

    #[test]
    fn test_group_payment_only_month_gets_bucket() {
        let payments = vec![payment("p1", "2024-03-15", "500")];
        let buckets = group(&[], &payments);

        let march = &buckets[&key(2024, 3)];
        assert_eq!(march.days_count, 0);
        assert_eq!(march.total_income, Decimal::ZERO);
        assert_eq!(march.monthly_balance, money("-500"));
    }

    #[test]
    fn test_group_separates_same_month_of_different_years() {
        let work_days = vec![
            work_day("1", "2023-05-01", "100", "0"),
            work_day("2", "2024-05-01", "200", "0"),
        ];
        let buckets = group(&work_days, &[]);
        assert_eq!(buckets[&key(2023, 5)].total_salary, money("100"));
        assert_eq!(buckets[&key(2024, 5)].total_salary, money("200"));
    }

    #[test]
    fn test_group_is_order_independent() {
        let work_days = vec![
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-02-05", "1000", "100"),
            work_day("3", "2024-01-03", "333.33", "0.01"),
            work_day("4", "2023-12-31", "10", "5"),
        ];
        let payments = vec![
            payment("p1", "2024-01-20", "1000"),
            payment("p2", "2024-02-01", "0.5"),
            payment("p3", "2023-12-01", "7"),
        ];
        let mut shuffled_days = work_days.clone();
        shuffled_days.reverse();
        shuffled_days.swap(0, 2);
        let mut shuffled_payments = payments.clone();
        shuffled_payments.rotate_left(1);

        let a = group(&work_days, &payments);
        let b = group(&shuffled_days, &shuffled_payments);
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        for (key, bucket) in &a {
            let other = &b[key];
            assert_eq!(bucket.days_count, other.days_count);
            assert_eq!(bucket.total_salary, other.total_salary);
            assert_eq!(bucket.total_bonus, other.total_bonus);
            assert_eq!(bucket.total_income, other.total_income);
            assert_eq!(bucket.total_paid, other.total_paid);
            assert_eq!(bucket.monthly_balance, other.monthly_balance);
        }
    }

    #[test]
    fn test_group_keeps_duplicate_records() {
        let work_days = vec![
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("1", "2024-01-10", "1000", "0"),
        ];
        let buckets = group(&work_days, &[]);
        assert_eq!(buckets[&key(2024, 1)].days_count, 2);
        assert_eq!(buckets[&key(2024, 1)].total_salary, money("2000"));
    }
}
