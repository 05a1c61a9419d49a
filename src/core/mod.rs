mod action;
mod context;
mod module;

pub use action::{Action, NotifyLevel};
pub use context::Context;
pub use module::Module;
