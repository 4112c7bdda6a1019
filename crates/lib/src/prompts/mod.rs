//! # Prompt Template Modules
//!
//! `tasks` holds the template text for each document kind and `core` assembles
//! those templates into the prompts sent to the AI provider.

pub mod core;
pub mod tasks;

pub use self::core::{build_prompt, formatting_rules, system_prompt};
