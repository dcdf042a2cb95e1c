//! Database entities module

pub mod employee;
pub mod employee_territory;
pub mod order;
pub mod territory;

pub use employee::Entity as Employee;
pub use employee_territory::Entity as EmployeeTerritory;
pub use order::Entity as Order;
pub use territory::Entity as Territory;
