//! Order domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer order handled by exactly one employee
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_id: Option<String>,
    /// Owning employee
    pub employee_id: i32,
    pub order_date: Option<DateTime<Utc>>,
    pub required_date: Option<DateTime<Utc>>,
    pub shipped_date: Option<DateTime<Utc>>,
    /// Shipper identifier
    pub ship_via: Option<i32>,
    pub freight: f64,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub completed: bool,
}
