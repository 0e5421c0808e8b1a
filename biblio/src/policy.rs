//! Circulation policy: loan periods and the fee schedule.
//!
//! All date arithmetic for the circulation engine lives here so that the
//! lending window, extension length, and fee amounts can be tuned from
//! configuration without touching the operations themselves.

use chrono::{Days, NaiveDate};

/// Loan periods and fee schedule for circulation operations.
///
/// # Examples
///
/// ```
/// use biblio::CirculationPolicy;
/// use chrono::NaiveDate;
///
/// let policy = CirculationPolicy::default();
/// let checkout = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(
///     policy.due_date(checkout),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CirculationPolicy {
    /// Number of days a checkout lasts before the book is due.
    pub loan_period_days: u64,
    /// Number of days added by a due date extension.
    pub extension_days: u64,
    /// Fee per full day late, in whole currency units.
    pub late_fee_per_day: i64,
    /// Flat fee added when a book is returned damaged.
    pub damage_fee: i64,
    /// Whether checkout of an unavailable book is rejected.
    pub enforce_availability: bool,
    /// Whether a user may hold multiple open reservations for one book.
    pub allow_duplicate_reservations: bool,
}

impl Default for CirculationPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            extension_days: 7,
            late_fee_per_day: 5,
            damage_fee: 20,
            enforce_availability: true,
            allow_duplicate_reservations: true,
        }
    }
}

impl CirculationPolicy {
    /// Creates a policy with the default schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the loan period in days.
    #[must_use]
    pub const fn with_loan_period_days(mut self, days: u64) -> Self {
        self.loan_period_days = days;
        self
    }

    /// Sets the extension length in days.
    #[must_use]
    pub const fn with_extension_days(mut self, days: u64) -> Self {
        self.extension_days = days;
        self
    }

    /// Sets the late fee per day.
    #[must_use]
    pub const fn with_late_fee_per_day(mut self, fee: i64) -> Self {
        self.late_fee_per_day = fee;
        self
    }

    /// Sets the flat damage fee.
    #[must_use]
    pub const fn with_damage_fee(mut self, fee: i64) -> Self {
        self.damage_fee = fee;
        self
    }

    /// Sets whether checkout of an unavailable book is rejected.
    #[must_use]
    pub const fn with_enforce_availability(mut self, enforce: bool) -> Self {
        self.enforce_availability = enforce;
        self
    }

    /// Sets whether duplicate open reservations are allowed.
    #[must_use]
    pub const fn with_allow_duplicate_reservations(mut self, allow: bool) -> Self {
        self.allow_duplicate_reservations = allow;
        self
    }

    /// Computes the due date for a checkout made on the given date.
    #[must_use]
    pub fn due_date(&self, checkout_date: NaiveDate) -> NaiveDate {
        checkout_date + Days::new(self.loan_period_days)
    }

    /// Computes the new due date after one extension.
    #[must_use]
    pub fn extended_due_date(&self, due_date: NaiveDate) -> NaiveDate {
        due_date + Days::new(self.extension_days)
    }

    /// Computes the fine for a return.
    ///
    /// The late portion is the number of whole days past the due date,
    /// floored at zero, times the daily late fee. The damage fee is a flat
    /// amount added when the book comes back damaged.
    #[must_use]
    pub fn late_fine(&self, due_date: NaiveDate, returned_on: NaiveDate, damaged: bool) -> i64 {
        let days_late = (returned_on - due_date).num_days().max(0);
        let mut fine = days_late * self.late_fee_per_day;
        if damaged {
            fine += self.damage_fee;
        }
        fine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_schedule() {
        let policy = CirculationPolicy::default();
        assert_eq!(policy.loan_period_days, 14);
        assert_eq!(policy.extension_days, 7);
        assert_eq!(policy.late_fee_per_day, 5);
        assert_eq!(policy.damage_fee, 20);
        assert!(policy.enforce_availability);
        assert!(policy.allow_duplicate_reservations);
    }

    #[test]
    fn test_builder_methods() {
        let policy = CirculationPolicy::new()
            .with_loan_period_days(21)
            .with_extension_days(14)
            .with_late_fee_per_day(2)
            .with_damage_fee(50)
            .with_enforce_availability(false)
            .with_allow_duplicate_reservations(false);

        assert_eq!(policy.loan_period_days, 21);
        assert_eq!(policy.extension_days, 14);
        assert_eq!(policy.late_fee_per_day, 2);
        assert_eq!(policy.damage_fee, 50);
        assert!(!policy.enforce_availability);
        assert!(!policy.allow_duplicate_reservations);
    }

    #[test]
    fn test_due_date_is_fourteen_days_out() {
        let policy = CirculationPolicy::default();
        assert_eq!(policy.due_date(date(2024, 1, 1)), date(2024, 1, 15));
        // Crosses a month boundary
        assert_eq!(policy.due_date(date(2024, 1, 25)), date(2024, 2, 8));
        // Leap year February
        assert_eq!(policy.due_date(date(2024, 2, 20)), date(2024, 3, 5));
    }

    #[test]
    fn test_extended_due_date_adds_seven_days() {
        let policy = CirculationPolicy::default();
        assert_eq!(
            policy.extended_due_date(date(2024, 1, 15)),
            date(2024, 1, 22)
        );
    }

    #[test]
    fn test_on_time_return_has_no_late_fee() {
        let policy = CirculationPolicy::default();
        let due = date(2024, 1, 15);
        assert_eq!(policy.late_fine(due, date(2024, 1, 10), false), 0);
        assert_eq!(policy.late_fine(due, date(2024, 1, 15), false), 0);
    }

    #[test]
    fn test_on_time_damaged_return_charges_flat_fee() {
        let policy = CirculationPolicy::default();
        let due = date(2024, 1, 15);
        assert_eq!(policy.late_fine(due, date(2024, 1, 10), true), 20);
        assert_eq!(policy.late_fine(due, date(2024, 1, 15), true), 20);
    }

    #[test]
    fn test_late_return_charges_per_day() {
        let policy = CirculationPolicy::default();
        let due = date(2024, 1, 15);
        // 5 days late at 5 per day
        assert_eq!(policy.late_fine(due, date(2024, 1, 20), false), 25);
        // 1 day late
        assert_eq!(policy.late_fine(due, date(2024, 1, 16), false), 5);
    }

    #[test]
    fn test_late_damaged_return_combines_fees() {
        let policy = CirculationPolicy::default();
        let due = date(2024, 1, 15);
        assert_eq!(policy.late_fine(due, date(2024, 1, 20), true), 45);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = NaiveDate> {
            (2000i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            // PROPERTY: fines are never negative, no matter how early the return
            #[test]
            fn prop_fine_never_negative(
                due in arb_date(),
                returned in arb_date(),
                damaged in any::<bool>(),
            ) {
                let policy = CirculationPolicy::default();
                prop_assert!(policy.late_fine(due, returned, damaged) >= 0);
            }

            // PROPERTY: a damaged return costs exactly the damage fee more
            // than the same return undamaged
            #[test]
            fn prop_damage_fee_is_additive(
                due in arb_date(),
                returned in arb_date(),
            ) {
                let policy = CirculationPolicy::default();
                let clean = policy.late_fine(due, returned, false);
                let damaged = policy.late_fine(due, returned, true);
                prop_assert_eq!(damaged - clean, policy.damage_fee);
            }

            // PROPERTY: extension always moves the due date strictly forward
            #[test]
            fn prop_extension_moves_due_date_forward(due in arb_date()) {
                let policy = CirculationPolicy::default();
                prop_assert!(policy.extended_due_date(due) > due);
            }

            // PROPERTY: the due date is exactly loan_period_days after checkout
            #[test]
            fn prop_due_date_offset(checkout in arb_date()) {
                let policy = CirculationPolicy::default();
                let due = policy.due_date(checkout);
                prop_assert_eq!((due - checkout).num_days(), 14);
            }
        }
    }
}
