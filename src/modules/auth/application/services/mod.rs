pub mod create_user_service;
pub mod delete_account_service;
pub mod login_user_service;
pub mod logout_user_service;
pub mod token_hasher;
pub mod verify_email_service;

pub use create_user_service::CreateUserService;
pub use delete_account_service::DeleteAccountService;
pub use login_user_service::LoginUserService;
pub use logout_user_service::LogoutUserService;
pub use verify_email_service::VerifyEmailService;
