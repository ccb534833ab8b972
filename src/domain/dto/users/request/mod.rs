pub mod create_user;
pub mod login_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use login_user::LoginUserRequest;
pub use update_user::UpdateUserRequest;
