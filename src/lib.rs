//! Formatrack: a REST backend for training-course applications.
//!
//! Candidates register and apply to formations; administrators review the
//! candidatures and manage the catalog. Layered hexagonally: `domain` holds
//! the business rules behind ports, `application` the per-operation use
//! cases, `adapters` the actix-web surface and `infrastructure` the Postgres
//! and security implementations.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
