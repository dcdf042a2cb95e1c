//! Application layer: use-case orchestration over the domain repositories

pub mod employees;

pub use employees::EmployeeService;
