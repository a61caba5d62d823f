use serde::{Deserialize, Serialize};

use crate::{Department, Identifier, lenient};

/// Body of `POST /api/users`.
///
/// `department_id` is whatever was typed; the user service resolves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
}

/// The aggregate returned by `GET /api/users/{id}`: the user together with
/// the department the user service resolved for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, deserialize_with = "lenient::record")]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub department: Option<Department>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_is_camel_case() {
        let body = serde_json::to_value(NewUser {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            department_id: "1".into(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john@example.com",
                "departmentId": "1"
            })
        );
    }

    #[test]
    fn parses_aggregate() {
        let details: UserDetails = serde_json::from_value(json!({
            "user": { "id": 2, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" },
            "department": { "id": 1, "departmentName": "IT", "departmentCode": "IT-01" }
        }))
        .unwrap();

        let user = details.user.unwrap();
        let department = details.department.unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(department.department_address, None);
    }

    #[test]
    fn unavailable_department_fallback_parses() {
        let details: UserDetails = serde_json::from_value(json!({
            "user": { "id": 2, "firstName": "Ada" },
            "department": {
                "id": 0,
                "departmentName": "Department Service is unavailable. Please try again later.",
                "departmentCode": null,
                "departmentAddress": null
            }
        }))
        .unwrap();

        let department = details.department.unwrap();
        assert!(!department.id.unwrap().is_assigned());
        assert_eq!(department.department_code, None);
    }

    #[test]
    fn malformed_half_does_not_sink_the_other() {
        let details: UserDetails = serde_json::from_str(
            r#"{
                "user": { "id": 99999999999999999999, "firstName": "Ada", "email": "ada@example.com" },
                "department": "unavailable"
            }"#,
        )
        .unwrap();

        let user = details.user.unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert!(user.id.unwrap().is_assigned());
        assert_eq!(details.department, None);
    }
}
