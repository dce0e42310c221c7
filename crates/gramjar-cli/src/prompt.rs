//! Interactive credential prompt.

use dialoguer::{Input, Password};

use gramjar_core::error::CredentialsError;
use gramjar_core::traits::CredentialPrompt;
use gramjar_core::types::Username;
use gramjar_core::{Credentials, Result};

/// Terminal-backed credential prompt.
#[derive(Debug, Default)]
pub struct TermPrompt;

impl TermPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialPrompt for TermPrompt {
    fn ask(&self) -> Result<Credentials> {
        let username: String = Input::new()
            .with_prompt("Username")
            .validate_with(|input: &String| Username::new(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(|_| CredentialsError::Aborted)?;

        let password: String = Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|_| CredentialsError::Aborted)?;

        let username = Username::new(username)?;
        Ok(Credentials::new(username, password))
    }
}
