//! Read-only queries over the feedback dataset.
//!
//! Every operation takes the shared [`Dataset`](crate::dataset::Dataset) by
//! reference and never mutates it. Averages are two-step where a single
//! score is needed: rows collapse to per-column means first, then columns
//! collapse to one value.

pub mod aggregate;
pub mod details;
pub mod faculties;
pub mod leaderboard;
pub mod suggestions;
pub mod types;
pub mod utility;

pub use details::faculty_details;
pub use faculties::list_faculties;
pub use leaderboard::leaderboard;
pub use suggestions::faculty_suggestions;
