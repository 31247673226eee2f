//! # cilin-core
//!
//! Foundation crate for the Cilin similarity engine.
//! Defines the semantic code model, errors, config, constants, and the tagger trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CilinConfig;
pub use errors::{CilinError, CilinResult};
pub use models::{CodeLevel, CodeMarker, DegradationEvent, SemanticCode, TaggedToken};
