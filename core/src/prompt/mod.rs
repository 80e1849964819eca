//! Prompt assembly: `{{name}}` templates filled from the request and resolved parameters.

pub mod builder;
pub mod template;

pub use builder::{render_knowledge_base, PromptBuilder, PromptPair};
pub use template::{placeholders, render};
