//! Order aggregate (read-only)

pub mod model;
pub mod repository;

pub use model::Order;
pub use repository::OrderRepository;
