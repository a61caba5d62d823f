use serde::{Deserialize, Serialize};

use crate::{Identifier, lenient};

/// Body of `POST /api/departments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub department_name: String,
    pub department_code: String,
    pub department_address: String,
}

/// A department as returned by `GET /api/departments/{id}`.
///
/// Every field is optional: the response is not ours to trust, and a missing
/// field is rendered with fallback text rather than failing the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub department_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub department_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub department_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub user_count: Option<u64>,
}
