use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::directory::Credentials;
use crate::directory::DirectoryError;
use crate::directory::UserDirectory;
use crate::password::PasswordHasher;

#[derive(Debug, Clone)]
pub struct TestUser {
    pub email: String,
    pub password_hash: String,
}

impl Credentials for TestUser {
    fn subject(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Directory backed by a map keyed by email.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: Mutex<HashMap<String, TestUser>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, email: &str, password: &str) {
        let hash = PasswordHasher::new().hash(password).unwrap();
        self.insert_raw(email, &hash);
    }

    pub fn insert_raw(&self, email: &str, password_hash: &str) {
        self.users.lock().unwrap().insert(
            email.to_string(),
            TestUser {
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
    }

    pub fn remove(&self, email: &str) {
        self.users.lock().unwrap().remove(email);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    type User = TestUser;

    async fn find_by_unique_field(&self, value: &str) -> Result<Option<TestUser>, DirectoryError> {
        Ok(self.users.lock().unwrap().get(value).cloned())
    }
}

/// Directory whose backend is always down.
pub struct FailingDirectory;

#[async_trait]
impl UserDirectory for FailingDirectory {
    type User = TestUser;

    async fn find_by_unique_field(&self, _value: &str) -> Result<Option<TestUser>, DirectoryError> {
        Err(DirectoryError("connection refused".to_string()))
    }
}
