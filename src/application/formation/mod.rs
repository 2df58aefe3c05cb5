//! Formation catalog use cases

mod create_formation;
mod delete_formation;
mod list_formations;
mod update_formation;

pub use create_formation::{CreateFormationCommand, CreateFormationUseCase};
pub use delete_formation::DeleteFormationUseCase;
pub use list_formations::ListFormationsUseCase;
pub use update_formation::{UpdateFormationCommand, UpdateFormationUseCase};
