//! # promptdoc
//!
//! Turns free text or a pair of coordinates into an HTML document by building a
//! sectioned prompt, sending it to a chat-completion provider and stripping the
//! markdown fences from the answer.

pub mod errors;
pub mod generator;
pub mod prompts;
pub mod providers;
pub mod sanitize;
pub mod types;

pub use errors::PromptError;
pub use generator::{DocumentGenerator, DocumentGeneratorBuilder};
pub use types::{
    ClientTextRequest, CoordinatesRequest, DocumentKind, DocumentRequest, GeneratedDocument,
    Language, LocationName,
};
