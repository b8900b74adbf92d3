use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered member. Created at signup, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub member_since: DateTime<Utc>,
    /// Genre labels used by the recommendation engine, possibly empty
    pub preferences: Vec<String>,
}

/// Signup input. The ID and membership timestamp are assigned by the
/// account repository.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub preferences: Vec<String>,
}
