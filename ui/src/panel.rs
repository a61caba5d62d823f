//! Display text for lookup results.
//!
//! Backend responses are treated as untrusted: any field that is missing or
//! empty is replaced by fallback text instead of rendering blank.

use types::{Department, Identifier, User, UserDetails};

use crate::Found;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const ADDRESS_NOT_SPECIFIED: &str = "Address not specified";

fn text_or(value: Option<&String>, fallback: &str) -> String {
    value
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn id_or_na(id: Option<&Identifier>) -> String {
    id.filter(|id| id.is_assigned())
        .map(Identifier::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPanel {
    /// The identifier that was searched for.
    pub id: String,
    pub user_count: String,
    pub name: String,
    pub code: String,
    pub address: String,
}

impl DepartmentPanel {
    pub fn new(found: &Found<Department>) -> Self {
        let department = &found.record;
        let user_count = match department.user_count {
            Some(n) if n > 0 => format!("{n} Users"),
            _ => format!("{NOT_AVAILABLE} Users"),
        };

        Self {
            id: found.id.clone(),
            user_count,
            name: text_or(department.department_name.as_ref(), NOT_AVAILABLE),
            code: text_or(department.department_code.as_ref(), NOT_AVAILABLE),
            address: text_or(department.department_address.as_ref(), ADDRESS_NOT_SPECIFIED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPanel {
    /// The identifier that was searched for.
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_id: String,
    pub department_id: String,
    pub department_name: String,
    pub department_code: String,
    pub department_address: String,
}

impl UserPanel {
    pub fn new(found: &Found<UserDetails>) -> Self {
        let user = found.record.user.clone().unwrap_or_default();
        let department = found.record.department.clone().unwrap_or_default();

        Self {
            id: found.id.clone(),
            name: full_name(&user),
            email: text_or(user.email.as_ref(), NOT_AVAILABLE),
            user_id: id_or_na(user.id.as_ref()),
            department_id: id_or_na(department.id.as_ref()),
            department_name: text_or(department.department_name.as_ref(), NOT_AVAILABLE),
            department_code: text_or(department.department_code.as_ref(), NOT_AVAILABLE),
            department_address: text_or(department.department_address.as_ref(), NOT_SPECIFIED),
        }
    }
}

fn full_name(user: &User) -> String {
    let parts: Vec<&str> = [&user.first_name, &user.last_name]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(" ")
    }
}
