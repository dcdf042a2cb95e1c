//! Employee aggregate
//!
//! Contains the Employee entity, its validation rules, and repository interface.

pub mod model;
pub mod repository;

pub use model::Employee;
pub use repository::EmployeeRepository;
