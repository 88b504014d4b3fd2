//! parley-dialogue
//!
//! The pieces around the matchers that make a conversation: name capture,
//! yes/no confirmation, a nearest-neighbour classifier for small-talk
//! sub-intents, templated replies, and the console session loop.
pub mod choice;
pub mod classifier;
pub mod identity;
pub mod session;
pub mod small_talk;

pub use choice::parse_choice;
pub use classifier::NearestNeighbour;
pub use identity::extract_name;
pub use session::Session;
pub use small_talk::SmallTalk;
