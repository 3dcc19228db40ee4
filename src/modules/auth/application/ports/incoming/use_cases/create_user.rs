use std::sync::OnceLock;

use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;
const ANONYMOUS_USERNAME_MAX: usize = 30;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;

fn handle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("static regex"))
}

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    username: String,
    email: String,
    password: String,
    anonymous_username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error("Username must be between 3 and 30 characters")]
    UsernameLength,

    #[error("Username may only contain letters, digits, '.', '_' and '-'")]
    UsernameCharacters,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be between 8 and 128 characters")]
    PasswordLength,

    #[error("Anonymous username must not exceed 30 characters")]
    AnonymousUsernameTooLong,

    #[error("Anonymous username may only contain letters, digits, '.', '_' and '-'")]
    AnonymousUsernameCharacters,
}

impl CreateUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
        anonymous_username: Option<String>,
    ) -> Result<Self, CreateUserCommandError> {
        let username = username.trim();
        let username_len = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
            return Err(CreateUserCommandError::UsernameLength);
        }
        if !handle_pattern().is_match(username) {
            return Err(CreateUserCommandError::UsernameCharacters);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserCommandError::InvalidEmail);
        }

        let password_len = password.chars().count();
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&password_len) {
            return Err(CreateUserCommandError::PasswordLength);
        }

        let anonymous_username = match anonymous_username.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(alias) => {
                if alias.chars().count() > ANONYMOUS_USERNAME_MAX {
                    return Err(CreateUserCommandError::AnonymousUsernameTooLong);
                }
                if !handle_pattern().is_match(alias) {
                    return Err(CreateUserCommandError::AnonymousUsernameCharacters);
                }
                Some(alias.to_string())
            }
        };

        Ok(Self {
            username: username.to_string(),
            email,
            password,
            anonymous_username,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn anonymous_username(&self) -> Option<&str> {
        self.anonymous_username.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub anonymous_username: Option<String>,
    /// Raw token for the verification link. Only its hash is stored.
    pub verification_token: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Anonymous username already taken")]
    AnonymousUsernameTaken,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<CreateUserOutput, CreateUserError>;
}
