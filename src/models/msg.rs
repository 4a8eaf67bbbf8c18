//! The `{ code, msg, extra }` envelope every employee endpoint answers with.
//!
//! Successful calls carry a typed payload that is flattened into `extra`;
//! failures carry a reason plus an optional advisory (`va_msg`) and an
//! optional per-field error map (`errorFields`).

use std::collections::BTreeMap;

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::page::PageInfo;

pub const SUCCESS_CODE: u16 = 100;
pub const FAILURE_CODE: u16 = 200;

const SUCCESS_MSG: &str = "success";

#[derive(Debug)]
pub enum Msg<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Msg<T> {
    pub fn succeed(payload: T) -> Self {
        Msg::Success(payload)
    }

    pub fn fail(failure: Failure) -> Self {
        Msg::Failure(failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Msg::Success(_))
    }
}

#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    #[serde(skip)]
    pub reason: String,
    #[serde(rename = "va_msg", skip_serializing_if = "Option::is_none")]
    pub va_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fields: Option<BTreeMap<String, String>>,
}

impl Failure {
    pub fn advisory(reason: &str, va_msg: &str) -> Self {
        Failure {
            reason: reason.to_string(),
            va_msg: Some(va_msg.to_string()),
            error_fields: None,
        }
    }

    pub fn fields(error_fields: BTreeMap<String, String>) -> Self {
        Failure {
            reason: "validation failed".to_string(),
            va_msg: None,
            error_fields: Some(error_fields),
        }
    }
}

/// Success payload with nothing to report.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoPayload {
    pub page_info: PageInfo<Employee>,
}

#[derive(Debug, Serialize)]
pub struct EmpPayload {
    pub emp: Employee,
}

#[derive(Debug, Serialize)]
pub struct DeptsPayload {
    pub depts: Vec<Department>,
}

impl<T: Serialize> Serialize for Msg<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Msg", 3)?;
        match self {
            Msg::Success(payload) => {
                state.serialize_field("code", &SUCCESS_CODE)?;
                state.serialize_field("msg", SUCCESS_MSG)?;
                state.serialize_field("extra", payload)?;
            }
            Msg::Failure(failure) => {
                state.serialize_field("code", &FAILURE_CODE)?;
                state.serialize_field("msg", &failure.reason)?;
                state.serialize_field("extra", failure)?;
            }
        }
        state.end()
    }
}

impl<T: Serialize> Responder for Msg<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
