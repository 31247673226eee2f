mod degradation_event;
mod semantic_code;
mod tagged_token;

pub use degradation_event::DegradationEvent;
pub use semantic_code::{CodeLevel, CodeMarker, SemanticCode};
pub use tagged_token::TaggedToken;
