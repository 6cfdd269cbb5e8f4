//! tiny-login - placeholder login screen.
//!
//! A single-screen Yew app: an unauthenticated login form that flips to a
//! "Welcome!" panel on submit. Nothing is verified, sent, or stored.

mod app;
mod pages;
pub mod session;

pub use app::App;
