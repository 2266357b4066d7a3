//! Profile service.
//!
//! Reads and partially edits the caller's own profile. Email changes go
//! through the same structural validation as signup and surface uniqueness
//! conflicts from the repository.

use linkshelf_types::error::{RepositoryError, UserError};
use linkshelf_types::user::{EditUserRequest, User, UserId};

use crate::repository::user::UserRepository;
use crate::service::validate_email;

/// Service for reading and editing user profiles.
pub struct UserService<U: UserRepository> {
    user_repo: U,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new UserService.
    pub fn new(user_repo: U) -> Self {
        Self { user_repo }
    }

    /// Get a user's profile by ID.
    pub async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.user_repo
            .get_by_id(id)
            .await
            .map_err(|e| UserError::Storage(e.to_string()))?
            .ok_or(UserError::NotFound)
    }

    /// Apply a partial profile edit and return the updated profile.
    ///
    /// Only supplied fields change; empty strings are applied as given
    /// (clearing a name is a legitimate edit).
    pub async fn edit_user(&self, id: &UserId, request: EditUserRequest) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = request.email {
            let email = email.trim().to_string();
            validate_email(&email).map_err(|_| UserError::InvalidEmail(email.clone()))?;
            user.email = email;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.last_name = Some(last_name);
        }

        user.updated_at = chrono::Utc::now();

        self.user_repo.update(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => UserError::EmailTaken(user.email.clone()),
            RepositoryError::NotFound => UserError::NotFound,
            other => UserError::Storage(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_user_request_defaults() {
        let req = EditUserRequest::default();
        assert!(req.email.is_none());
        assert!(req.first_name.is_none());
        assert!(req.last_name.is_none());
    }
}
