mod create_user;
mod delete_account;
mod login_user;
mod logout_user;
mod verify_email;

pub use create_user::{
    CreateUserCommand, CreateUserCommandError, CreateUserError, CreateUserOutput,
    CreateUserUseCase,
};
pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use login_user::{
    LoginCommand, LoginCommandError, LoginError, LoginOutput, LoginUserInfo, LoginUserUseCase,
};
pub use logout_user::{LogoutError, LogoutUserUseCase};
pub use verify_email::{VerifyEmailError, VerifyEmailUseCase};
