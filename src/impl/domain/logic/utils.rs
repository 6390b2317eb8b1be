use crate::entities::MonthKey;

/// Returns every month from `first` to `last`, inclusive. Empty if `last` is
/// before `first`.
pub(crate) fn month_range(first: MonthKey, last: MonthKey) -> Vec<MonthKey> {
    let mut months = Vec::new();
    let mut current = first;
    while current <= last {
        months.push(current);
        current = current.next();
    }
    months
}
