//! Territory aggregate (read-only)

pub mod model;
pub mod repository;

pub use model::{EmployeeTerritory, Territory};
pub use repository::TerritoryRepository;
