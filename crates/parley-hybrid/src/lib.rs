//! parley-hybrid
//!
//! Two-stage matching over stored corpora: the intent router (direct stage,
//! then raw bag-of-words cosine) and question answering (retrieval with
//! log-tf weighting, plus appending confirmed pairs to the QA corpus).
pub mod qa;
pub mod router;

pub use qa::{QaRetriever, QaUpdater, UpdateOutcome};
pub use router::{IntentRouter, RouteOutcome};
