mod service;
mod stack;

pub use service::Assistant;
pub use stack::{Stack, TemplateBundle};
