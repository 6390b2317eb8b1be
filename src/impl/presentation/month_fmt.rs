use chrono::Month;

use crate::entities::MonthKey;

impl MonthKey {
    /// Ex. "March 2024".
    pub(crate) fn label(&self) -> String {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or_else(|| self.to_string(), |m| format!("{} {}", m.name(), self.year))
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::MonthKey;

    #[test]
    fn test_label() {
        assert_eq!(MonthKey { year: 2024, month: 3 }.label(), "March 2024");
        assert_eq!(MonthKey { year: 2023, month: 12 }.label(), "December 2023");
        assert_eq!(MonthKey { year: 2023, month: 13 }.label(), "2023-13");
    }
}
