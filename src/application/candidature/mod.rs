//! Candidature use cases

mod submit_candidature;

pub use submit_candidature::{SubmitCandidatureCommand, SubmitCandidatureUseCase};
