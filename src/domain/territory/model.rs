//! Territory domain entity

use serde::{Deserialize, Serialize};

/// Geographic sales territory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Territory {
    /// Territory code, e.g. "01581"
    pub id: String,
    pub description: String,
    pub region_id: i32,
}

/// Join row assigning a territory to an employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeTerritory {
    pub employee_id: i32,
    pub territory_id: String,
}
