//! Candidate review use cases: admin decisions and the status listings

mod decide_candidature;
mod list_candidates;

pub use decide_candidature::{DecideCandidatureCommand, DecideCandidatureUseCase};
pub use list_candidates::{CandidateFilter, ListCandidatesUseCase};
