pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod types;

pub use alignment::report::{build_report, load_session, RecitationReport, RecitationSession};
pub use config::AlignConfig;
pub use error::AlignmentError;
pub use pipeline::builder::RecitationAlignerBuilder;
pub use pipeline::runtime::{AlignmentOutcome, RecitationAligner};
pub use pipeline::traits::{Normalizer, TokenMatcher};
pub use types::{AlignmentStep, StepKind, Verse, Word, WordState};
