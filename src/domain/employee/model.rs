//! Employee domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff member, optionally reporting to another employee.
///
/// Profile fields are opaque to the domain beyond structural validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Employee {
    /// Store-assigned identifier (ignored on create)
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 50, message = "last name must be 1-50 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 50, message = "first name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(max = 30, message = "title must be at most 30 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 25, message = "title of courtesy must be at most 25 characters"))]
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    #[validate(length(max = 60))]
    pub address: Option<String>,
    #[validate(length(max = 15))]
    pub city: Option<String>,
    #[validate(length(max = 15))]
    pub region: Option<String>,
    #[validate(length(max = 10, message = "postal code must be at most 10 characters"))]
    pub postal_code: Option<String>,
    #[validate(length(max = 15))]
    pub country: Option<String>,
    #[validate(length(max = 24, message = "home phone must be at most 24 characters"))]
    pub home_phone: Option<String>,
    pub notes: Option<String>,
    #[validate(url(message = "avatar url must be a valid URL"))]
    pub avatar_url: Option<String>,
    /// Superior's identifier; `None` for the root of the hierarchy
    #[validate(range(min = 1, message = "reports_to must be a positive identifier"))]
    pub reports_to: Option<i32>,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn reporting_to(mut self, superior_id: i32) -> Self {
        self.reports_to = Some(superior_id);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_root(&self) -> bool {
        self.reports_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_is_root() {
        let e = Employee::new("Nancy", "Davolio");
        assert!(e.is_root());
        assert_eq!(e.full_name(), "Nancy Davolio");
    }

    #[test]
    fn valid_candidate_passes() {
        let mut e = Employee::new("Andrew", "Fuller").reporting_to(2);
        e.avatar_url = Some("https://example.com/avatar.png".into());
        e.title = Some("Vice President, Sales".into());
        assert!(e.validate().is_ok());
    }

    #[test]
    fn empty_names_are_rejected() {
        let e = Employee::new("", "");
        let errors = e.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }

    #[test]
    fn bad_avatar_and_reports_to_are_rejected() {
        let mut e = Employee::new("Janet", "Leverling").reporting_to(0);
        e.avatar_url = Some("not a url".into());
        let errors = e.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("avatar_url"));
        assert!(fields.contains_key("reports_to"));
    }
}
