pub mod content;
pub mod learning;
pub mod user;

pub use content::{AgeTier, CatalogWord, NewWord, WordSnapshot};
pub use learning::MasteryRecord;
pub use user::{TierLearnerCount, UserRow};
