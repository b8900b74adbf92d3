use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Loan period applied to every rental
pub const RENTAL_PERIOD_DAYS: i64 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Returned,
    /// Never persisted; derived at read time by [`Rental::status_at`]
    Overdue,
}

/// One rental record, active or historical. Records are appended and
/// updated in place, never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
    pub status: RentalStatus,
}

impl Rental {
    /// New active rental due `RENTAL_PERIOD_DAYS` after `now`
    pub fn new(user_id: &str, book_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            rented_at: now,
            due_date: now + Duration::days(RENTAL_PERIOD_DAYS),
            returned_at: None,
            status: RentalStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    /// Effective status at `now`: an active rental past its due date reads
    /// as overdue. The stored status stays `Active` until returned.
    pub fn status_at(&self, now: DateTime<Utc>) -> RentalStatus {
        if self.status == RentalStatus::Active && now > self.due_date {
            RentalStatus::Overdue
        } else {
            self.status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rental_is_active_and_due_in_two_weeks() {
        let now = Utc::now();
        let rental = Rental::new("u1", "b1", now);
        assert_eq!(rental.status, RentalStatus::Active);
        assert_eq!(rental.due_date, now + Duration::days(14));
        assert!(rental.returned_at.is_none());
    }

    #[test]
    fn status_at_derives_overdue_without_mutation() {
        let now = Utc::now();
        let rental = Rental::new("u1", "b1", now);
        assert_eq!(rental.status_at(now + Duration::days(1)), RentalStatus::Active);
        assert_eq!(rental.status_at(now + Duration::days(15)), RentalStatus::Overdue);
        // Stored status is untouched
        assert_eq!(rental.status, RentalStatus::Active);
    }

    #[test]
    fn returned_rental_never_reads_overdue() {
        let now = Utc::now();
        let mut rental = Rental::new("u1", "b1", now);
        rental.status = RentalStatus::Returned;
        rental.returned_at = Some(now + Duration::days(20));
        assert_eq!(rental.status_at(now + Duration::days(30)), RentalStatus::Returned);
    }

    #[test]
    fn status_serializes_lowercase_and_skips_absent_return() {
        let rental = Rental::new("u1", "b1", Utc::now());
        let json = serde_json::to_value(&rental).unwrap();
        assert_eq!(json["status"], "active");
        assert!(json.get("returnedAt").is_none());
        assert!(json.get("dueDate").is_some());
    }
}
