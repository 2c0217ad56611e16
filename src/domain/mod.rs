//! promptlab のドメイン型（型と不変条件）

pub mod interaction;
pub mod message;
pub mod refine;

pub use interaction::{FeedbackRating, Interaction, InteractionState, DEFAULT_SYSTEM_PROMPT};
pub use message::Message;
pub use refine::{build_refinement_prompt, FeedbackRequest};
