//! # Accounts
//!
//! Sign-up and passwordless login.
//!
//! ## Login Flow
//! ```text
//! login("name@domain.com")
//!      │
//!      ▼
//! SecurityCodes::generate_code() ──► 482913
//!      │
//!      ▼
//! Mailer::send_email("name@domain.com", "482913")
//! ```

use std::sync::Arc;

use shopkit_core::validation::is_valid_email;
use tracing::{info, warn};

use crate::error::ServiceResult;
use crate::ports::{Mailer, SecurityCodes};

/// Body of the email sent after a successful sign-up.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Handles account creation and login codes.
pub struct AccountService {
    mailer: Arc<dyn Mailer>,
    codes: Arc<dyn SecurityCodes>,
}

impl AccountService {
    pub fn new(mailer: Arc<dyn Mailer>, codes: Arc<dyn SecurityCodes>) -> Self {
        AccountService { mailer, codes }
    }

    /// Registers `email` and sends a welcome message.
    ///
    /// Returns `Ok(false)` without sending anything when the address is
    /// malformed.
    pub async fn sign_up(&self, email: &str) -> ServiceResult<bool> {
        if !is_valid_email(email) {
            warn!(email, "Rejected sign-up with malformed address");
            return Ok(false);
        }

        self.mailer.send_email(email, WELCOME_MESSAGE).await?;
        info!(email, "Welcome email sent");

        Ok(true)
    }

    /// Emails a fresh one-time code to `email`.
    pub async fn login(&self, email: &str) -> ServiceResult<()> {
        let code = self.codes.generate_code();
        self.mailer.send_email(email, &code.to_string()).await?;
        info!(email, "Login code sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::ports::{MockMailer, MockSecurityCodes};

    fn unused_codes() -> Arc<dyn SecurityCodes> {
        let mut codes = MockSecurityCodes::new();
        codes.expect_generate_code().never();
        Arc::new(codes)
    }

    #[tokio::test]
    async fn test_sign_up_rejects_invalid_email() {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().never();

        let service = AccountService::new(Arc::new(mailer), unused_codes());
        assert!(!service.sign_up("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_sends_welcome_email() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send_email()
            .withf(|to, body| to == "name@domain.com" && body.contains("Welcome"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AccountService::new(Arc::new(mailer), unused_codes());
        assert!(service.sign_up("name@domain.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_up_propagates_mailer_error() {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().returning(|to, _| {
            Err(ServiceError::Email {
                to: to.to_string(),
                reason: "relay refused".into(),
            })
        });

        let service = AccountService::new(Arc::new(mailer), unused_codes());
        let err = service.sign_up("name@domain.com").await.unwrap_err();
        assert!(err.is_collaborator_error());
    }

    #[tokio::test]
    async fn test_login_emails_generated_code() {
        let mut codes = MockSecurityCodes::new();
        codes.expect_generate_code().times(1).return_const(123_456u32);

        let mut mailer = MockMailer::new();
        mailer
            .expect_send_email()
            .withf(|to, body| to == "name@domain.com" && body == "123456")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AccountService::new(Arc::new(mailer), Arc::new(codes));
        service.login("name@domain.com").await.unwrap();
    }
}
