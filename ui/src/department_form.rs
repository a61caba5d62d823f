use std::fmt::Display;

use types::NewDepartment;

use crate::{
    FieldSpec, Notice, Rejection,
    form::is_blank,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    Name,
    Code,
    Address,
}

impl DepartmentField {
    pub const ALL: [DepartmentField; 3] = [Self::Name, Self::Code, Self::Address];

    pub fn spec(self) -> FieldSpec {
        match self {
            DepartmentField::Name => FieldSpec {
                id: "department_name",
                label: "Department Name",
                placeholder: "e.g., Engineering",
                input_type: "text",
                required: true,
                wide: false,
            },
            DepartmentField::Code => FieldSpec {
                id: "department_code",
                label: "Department Code",
                placeholder: "e.g., ENG-001",
                input_type: "text",
                required: true,
                wide: false,
            },
            DepartmentField::Address => FieldSpec {
                id: "department_address",
                label: "Department Address",
                placeholder: "Full address of the department",
                input_type: "text",
                required: false,
                wide: true,
            },
        }
    }
}

/// State of the "Create Department" view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    fields: NewDepartment,
    submitting: bool,
}

impl DepartmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DepartmentField) -> &str {
        match field {
            DepartmentField::Name => &self.fields.department_name,
            DepartmentField::Code => &self.fields.department_code,
            DepartmentField::Address => &self.fields.department_address,
        }
    }

    pub fn set(&mut self, field: DepartmentField, value: impl Into<String>) {
        let slot = match field {
            DepartmentField::Name => &mut self.fields.department_name,
            DepartmentField::Code => &mut self.fields.department_code,
            DepartmentField::Address => &mut self.fields.department_address,
        };
        *slot = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fill every field with example values for manual testing.
    pub fn load_sample(&mut self) -> Notice {
        self.fields = NewDepartment {
            department_name: "Information Technology".into(),
            department_code: "IT-2024".into(),
            department_address: "123 Tech Street, Silicon Valley".into(),
        };
        Notice::info("Sample data loaded!")
    }

    /// Validate and mark the form busy, returning the body to send.
    pub fn begin_submit(&mut self) -> Result<NewDepartment, Rejection> {
        if self.submitting {
            return Err(Rejection::Busy);
        }
        if is_blank(&self.fields.department_name) || is_blank(&self.fields.department_code) {
            return Err(Rejection::Invalid(Notice::error(
                "Please fill in Name and Code!",
            )));
        }

        self.submitting = true;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the create request. On failure the inputs are
    /// kept so the user can retry.
    pub fn finish_submit<E: Display>(&mut self, outcome: Result<(), E>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.fields = NewDepartment::default();
                Notice::success("Department created successfully!")
            }
            Err(error) => {
                tracing::warn!(%error, "failed to create department");
                Notice::error("Failed to create department!")
            }
        }
    }
}
