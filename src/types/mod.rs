//! Tipos da API do Podio
//!
//! Entidades decodificam de forma tolerante (`#[serde(default)]`) e
//! serializam de forma esparsa: campos `None` não vão para o JSON, para não
//! sobrescrever valores do servidor em atualizações parciais.

pub mod application;
pub mod field;
pub mod organization;
pub mod shared;
pub mod space;

pub use application::{AppConfig, AppCreated, AppIntegration, AppTask, Application, CreateApplicationParams};
pub use field::{CreateFieldParams, Field, FieldConfig, FieldCreated, FieldDelete};
pub use organization::Organization;
pub use shared::{Image, User};
pub use space::{CreateSpaceParams, Space, SpaceCreated};

/// IDs ausentes decodificam como 0 e não voltam para o JSON
pub(crate) fn is_unset_id(id: &u64) -> bool {
    *id == 0
}
