pub mod admin;
pub mod lang;
pub mod projects;

pub use admin::{AdminCommands, CreateArgs, ImageArgs, UpdateArgs};
pub use lang::LangCommands;
pub use projects::{ListArgs, ProjectsCommands};
