pub mod login;
pub mod welcome;

pub use login::Login;
pub use welcome::Welcome;
