//! Store-backed implementation of AccountRepository

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{AccountRepository, DomainError};
use crate::infrastructure::store::{self, KeyValueStore, SESSION_KEY, USERS_KEY};
use crate::models::{NewUser, User};

pub struct StoreAccountRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreAccountRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<User>, DomainError> {
        Ok(store::read_json(self.store.as_ref(), USERS_KEY)?.unwrap_or_default())
    }

    fn persist(&self, users: &[User]) -> Result<(), DomainError> {
        store::write_json(self.store.as_ref(), USERS_KEY, &users)
    }
}

impl AccountRepository for StoreAccountRepository {
    fn initialize(&self) -> Result<(), DomainError> {
        if !self.store.contains(USERS_KEY)? {
            self.persist(&[])?;
        }
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.load()
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.load()?.into_iter().find(|u| u.email == email))
    }

    fn create(&self, candidate: NewUser) -> Result<User, DomainError> {
        let mut users = self.load()?;
        if users.iter().any(|u| u.email == candidate.email) {
            return Err(DomainError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: candidate.email,
            name: candidate.name,
            member_since: Utc::now(),
            preferences: candidate.preferences,
        };
        users.push(user.clone());
        self.persist(&users)?;
        Ok(user)
    }

    fn set_current_session(&self, user: &User) -> Result<(), DomainError> {
        store::write_json(self.store.as_ref(), SESSION_KEY, user)
    }

    fn current_session(&self) -> Result<Option<User>, DomainError> {
        store::read_json(self.store.as_ref(), SESSION_KEY)
    }

    fn clear_current_session(&self) -> Result<(), DomainError> {
        self.store.remove(SESSION_KEY)
    }
}
