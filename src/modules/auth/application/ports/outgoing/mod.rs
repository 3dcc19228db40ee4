pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist::{TokenBlacklist, TokenBlacklistError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError, UserResult};
