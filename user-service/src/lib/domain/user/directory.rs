use std::sync::Arc;

use async_trait::async_trait;
use auth::Credentials;
use auth::DirectoryError;
use auth::UserDirectory;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

impl Credentials for User {
    fn subject(&self) -> &str {
        self.email.as_str()
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// User directory over the user repository, keyed by email address.
pub struct RepositoryDirectory {
    repository: Arc<dyn UserRepository>,
}

impl RepositoryDirectory {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserDirectory for RepositoryDirectory {
    type User = User;

    async fn find_by_unique_field(&self, value: &str) -> Result<Option<User>, DirectoryError> {
        self.repository
            .find_by_email(value)
            .await
            .map_err(|e| DirectoryError(e.to_string()))
    }
}
