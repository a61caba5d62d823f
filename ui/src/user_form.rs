use std::fmt::Display;

use types::NewUser;

use crate::{
    FieldSpec, Notice, Rejection,
    form::is_blank,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    DepartmentId,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::DepartmentId,
    ];

    pub fn spec(self) -> FieldSpec {
        match self {
            UserField::FirstName => FieldSpec {
                id: "first_name",
                label: "First Name",
                placeholder: "John",
                input_type: "text",
                required: true,
                wide: false,
            },
            UserField::LastName => FieldSpec {
                id: "last_name",
                label: "Last Name",
                placeholder: "Doe",
                input_type: "text",
                required: false,
                wide: false,
            },
            UserField::Email => FieldSpec {
                id: "email",
                label: "Email",
                placeholder: "john@example.com",
                input_type: "email",
                required: true,
                wide: false,
            },
            UserField::DepartmentId => FieldSpec {
                id: "department_id",
                label: "Department ID",
                placeholder: "Enter department ID",
                input_type: "text",
                required: true,
                wide: false,
            },
        }
    }
}

/// State of the "Create User" view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    fields: NewUser,
    submitting: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.fields.first_name,
            UserField::LastName => &self.fields.last_name,
            UserField::Email => &self.fields.email,
            UserField::DepartmentId => &self.fields.department_id,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let slot = match field {
            UserField::FirstName => &mut self.fields.first_name,
            UserField::LastName => &mut self.fields.last_name,
            UserField::Email => &mut self.fields.email,
            UserField::DepartmentId => &mut self.fields.department_id,
        };
        *slot = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn load_sample(&mut self) -> Notice {
        self.fields = NewUser {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            department_id: "1".into(),
        };
        Notice::info("Sample data loaded!")
    }

    /// Email format and the department reference are left to the user
    /// service; only presence is checked here.
    pub fn begin_submit(&mut self) -> Result<NewUser, Rejection> {
        if self.submitting {
            return Err(Rejection::Busy);
        }

        let NewUser {
            first_name,
            email,
            department_id,
            ..
        } = &self.fields;
        if [first_name, email, department_id].into_iter().any(|v| is_blank(v)) {
            return Err(Rejection::Invalid(Notice::error(
                "Please fill in all required fields!",
            )));
        }

        self.submitting = true;
        Ok(self.fields.clone())
    }

    pub fn finish_submit<E: Display>(&mut self, outcome: Result<(), E>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.fields = NewUser::default();
                Notice::success("User created successfully!")
            }
            Err(error) => {
                tracing::warn!(%error, "failed to create user");
                Notice::error("Failed to create user. Please try again.")
            }
        }
    }
}
