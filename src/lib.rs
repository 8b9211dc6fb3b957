// zenvibe library - peer support with an ai gateway for moderation and replies

pub mod cli;
pub mod config;
pub mod core;
mod error;
pub mod nav;
mod server;
pub mod tui;

pub use crate::core::{Gateway, ModerationResult, Provider};
pub use error::Error;
pub use nav::{NavEvent, Navigation, Tab};
pub use server::Server;
