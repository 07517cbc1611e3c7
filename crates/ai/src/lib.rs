//! LLM-backed content generation for Immoflow.
//!
//! One concern lives here: turning structured property facts into a French
//! listing description through a single completion call.

pub mod description;
pub mod error;

pub use description::{
    build_prompt, DescriptionGenerator, DescriptionRequest, DescriptionServiceTrait, DEFAULT_MODEL,
};
pub use error::AiError;
