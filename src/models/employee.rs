use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::department::Department;
use crate::utils::serde_helpers::double_option;
use crate::utils::validation::{validate_emp_name, validate_gender};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub department: Option<Department>,
}

/// Body of `POST /emp`. Fields are optional so a missing one is reported
/// through the field-error mapping instead of failing deserialization.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(required(message = "Name is required"), custom = "validate_emp_name")]
    pub name: Option<String>,
    #[validate(required(message = "Gender is required"), custom = "validate_gender")]
    pub gender: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Email format is invalid"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: Option<String>,
    pub department_id: Option<i32>,
}

/// Body of `PUT /emp/{id}`: only the fields present are written.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChanges {
    #[validate(custom = "validate_emp_name")]
    pub name: Option<String>,
    #[validate(custom = "validate_gender")]
    pub gender: Option<String>,
    #[validate(
        email(message = "Email format is invalid"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: Option<String>,
    /// Absent leaves the department alone; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub department_id: Option<Option<i32>>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.email.is_none()
            && self.department_id.is_none()
    }
}

/// A validated insert; built only from a `NewEmployee` that passed validation.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub department_id: Option<i32>,
}

impl TryFrom<NewEmployee> for EmployeeRecord {
    type Error = validator::ValidationErrors;

    fn try_from(new_employee: NewEmployee) -> Result<Self, Self::Error> {
        new_employee.validate()?;
        // validate() guarantees the required fields are present
        match new_employee {
            NewEmployee {
                name: Some(name),
                gender: Some(gender),
                email: Some(email),
                department_id,
            } => Ok(EmployeeRecord {
                name,
                gender,
                email,
                department_id,
            }),
            _ => Err(validator::ValidationErrors::new()),
        }
    }
}
