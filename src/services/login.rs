//! Login capability
//!
//! Authenticates the browser session once at the start of the run. Any
//! failure here is a session failure and aborts the run.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::infrastructure::PageDriver;

const LOGIN_URL: &str = "https://www.linkedin.com/login";
const USERNAME_INPUT: &str = "#username";
const PASSWORD_INPUT: &str = "#password";

const LOGIN_PAGE_SETTLE: Duration = Duration::from_secs(2);
const POST_LOGIN_SETTLE: Duration = Duration::from_secs(3);

pub struct LoginService {
    username: String,
    password: String,
}

impl LoginService {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Log the session in with the configured credentials.
    pub async fn login<D: PageDriver>(&self, driver: &D) -> Result<()> {
        info!("Logging in as {}", self.username);

        driver.navigate(LOGIN_URL).await?;
        driver.settle(LOGIN_PAGE_SETTLE).await;

        driver.type_text(USERNAME_INPUT, &self.username).await?;
        driver.type_text(PASSWORD_INPUT, &self.password).await?;
        driver.press_enter(PASSWORD_INPUT).await?;

        // Wait for login to complete
        driver.settle(POST_LOGIN_SETTLE).await;

        info!("✓ Logged in");
        Ok(())
    }
}
