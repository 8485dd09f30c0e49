mod handler;
mod types;

// Public API exports
pub use handler::eligible_jobs;
pub use types::EligibleJob;
