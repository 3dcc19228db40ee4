mod delete_account;
mod login_user;
mod logout_user;
mod register_user;
mod verify_email;

pub use delete_account::*;
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
pub use verify_email::*;
