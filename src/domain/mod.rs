pub mod auth;
pub mod candidature;
pub mod formation;
