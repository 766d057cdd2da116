pub mod config;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod register;
pub mod session_status;
pub mod token;

pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use password_reset::{ConfirmPasswordResetUseCase, RequestPasswordResetUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session_status::{SessionSnapshot, SessionStatusUseCase};
