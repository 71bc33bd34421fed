//! Credential verification for login.

use std::sync::Arc;

use tracing::warn;

use shelf_core::error::AppError;
use shelf_core::result::AppResult;
use shelf_database::UserStore;
use shelf_entity::user::User;

use crate::password::PasswordHasher;

/// Verifies email/password pairs against stored accounts.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Verify a credential pair and return the matching user.
    ///
    /// An unknown email and a wrong password produce the same error,
    /// so callers cannot probe which addresses are registered.
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown email");
            return Err(AppError::unauthenticated("Unauthorized"));
        };

        if !self.hasher.verify_password(password, &user.password_digest)? {
            warn!(email, "Login attempt with wrong password");
            return Err(AppError::unauthenticated("Unauthorized"));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::error::ErrorKind;
    use shelf_database::memory::MemoryUserStore;
    use shelf_entity::user::NewUser;

    async fn seeded_verifier() -> CredentialVerifier {
        let users = Arc::new(MemoryUserStore::new());
        let hasher = PasswordHasher::new();
        users
            .insert(NewUser {
                email: "bob@dylan.com".into(),
                password_digest: hasher.hash_password("toto1234!").unwrap(),
            })
            .await
            .unwrap();
        CredentialVerifier::new(users)
    }

    #[tokio::test]
    async fn correct_credentials_return_the_user() {
        let verifier = seeded_verifier().await;
        let user = verifier.verify("bob@dylan.com", "toto1234!").await.unwrap();
        assert_eq!(user.email, "bob@dylan.com");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_alike() {
        let verifier = seeded_verifier().await;

        let wrong_pw = verifier
            .verify("bob@dylan.com", "nope")
            .await
            .unwrap_err();
        let unknown = verifier.verify("ghost@dylan.com", "nope").await.unwrap_err();

        assert_eq!(wrong_pw.kind, ErrorKind::Unauthenticated);
        assert_eq!(unknown.kind, ErrorKind::Unauthenticated);
        assert_eq!(wrong_pw.message, unknown.message);
    }
}
