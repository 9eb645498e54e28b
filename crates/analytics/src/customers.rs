use chrono::{Datelike, FixedOffset, NaiveDate};
use core_types::{Customer, Gender};
use serde::{Deserialize, Serialize};

/// The customer card of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub total_customers: usize,
    /// Customers created in the same calendar month as `today`.
    pub new_this_month: usize,
    pub female: usize,
    pub male: usize,
}

/// Summarizes an account's customers relative to `today`, reading creation
/// timestamps in the account's `offset`.
pub fn summarize_customers(
    customers: &[Customer],
    today: NaiveDate,
    offset: FixedOffset,
) -> CustomerSummary {
    let mut summary = CustomerSummary {
        total_customers: customers.len(),
        ..CustomerSummary::default()
    };

    for customer in customers {
        // An unreadable timestamp counts as not new.
        if let Some(created) = customer.created_on(offset) {
            if created.year() == today.year() && created.month() == today.month() {
                summary.new_this_month += 1;
            }
        }

        match customer.gender() {
            Gender::Female => summary.female += 1,
            Gender::Male => summary.male += 1,
            Gender::Other => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use core_types::RawValue;

    fn customer(gender: &str, created_at: Option<&str>) -> Customer {
        Customer {
            gender: Some(gender.to_string()),
            created_at: created_at.map(RawValue::from),
            ..Customer::default()
        }
    }

    #[test]
    fn counts_new_customers_and_genders() {
        let customers = [
            customer("female", Some("2024-05-02T10:00:00Z")),
            customer("male", Some("2024-04-30T10:00:00Z")),
            customer("Female", Some("2023-05-15T10:00:00Z")),
            customer("unspecified", None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let summary = summarize_customers(&customers, today, Utc.fix());

        assert_eq!(
            summary,
            CustomerSummary { total_customers: 4, new_this_month: 1, female: 2, male: 1 }
        );
    }

    #[test]
    fn month_boundary_uses_account_offset() {
        let customers = [customer("male", Some("2024-04-30T23:30:00Z"))];
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let east = FixedOffset::east_opt(3600).unwrap();

        assert_eq!(summarize_customers(&customers, today, east).new_this_month, 1);
        assert_eq!(summarize_customers(&customers, today, Utc.fix()).new_this_month, 0);
    }

    #[test]
    fn unreadable_timestamps_are_not_new() {
        let customers = [
            customer("female", Some("not a date")),
            customer("male", Some("2024-05-03 08:00:00+00")),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let summary = summarize_customers(&customers, today, Utc.fix());

        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.new_this_month, 1);
    }
}
