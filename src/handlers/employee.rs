use actix_web::web;
use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::employee::{EmployeeChanges, EmployeeRecord, NewEmployee};
use crate::models::msg::{EmpPayload, Empty, Failure, Msg, PageInfoPayload};
use crate::models::page::{PageInfo, PageRequest, DEFAULT_PAGE_SIZE, NAVIGATE_PAGES};
use crate::services::{EmployeeService, SaveOutcome, UpdateOutcome};
use crate::utils::ids::{parse_delete_target, DeleteTarget};
use crate::utils::validation::{field_error_map, is_valid_emp_name, EMP_NAME_FORMAT_MSG};

pub const NAME_TAKEN_MSG: &str = "Username is not available";

#[derive(Deserialize)]
pub struct EmpNameQuery {
    #[serde(rename = "empName")]
    emp_name: String,
}

#[derive(Deserialize)]
pub struct EmployeeListQuery {
    pn: Option<u32>,
    #[serde(rename = "deptId")]
    dept_id: Option<i32>,
}

fn name_taken<T>() -> Msg<T> {
    Msg::fail(Failure::advisory("username already exists", NAME_TAKEN_MSG))
}

fn invalid_fields<T>(errors: &validator::ValidationErrors) -> Msg<T> {
    let fields = field_error_map(errors);
    debug!("Rejected employee payload: {:?}", fields);
    Msg::fail(Failure::fields(fields))
}

/// GET /empName?empName=
pub async fn search_employees(
    service: web::Data<EmployeeService>,
    query: web::Query<EmpNameQuery>,
) -> Result<Msg<PageInfoPayload>, AppError> {
    let page = service
        .get_by_name(&query.emp_name, PageRequest::first(DEFAULT_PAGE_SIZE))
        .await?;

    Ok(Msg::succeed(PageInfoPayload {
        page_info: PageInfo::new(page, NAVIGATE_PAGES),
    }))
}

/// DELETE /emp/{ids} where `ids` is `7` or `3-5-9`.
pub async fn delete_employees(
    service: web::Data<EmployeeService>,
    ids: web::Path<String>,
) -> Result<Msg<Empty>, AppError> {
    let segment = ids.into_inner();
    let target = parse_delete_target(&segment)
        .map_err(|err| AppError::BadRequest(format!("Invalid employee id list '{}': {}", segment, err)))?;

    match target {
        DeleteTarget::Single(id) => service.delete_emp(id).await?,
        DeleteTarget::Batch(ids) => service.delete_batch(&ids).await?,
    };

    Ok(Msg::succeed(Empty {}))
}

/// PUT /emp/{id}
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    emp_id: web::Path<i32>,
    changes: web::Json<EmployeeChanges>,
) -> Result<Msg<Empty>, AppError> {
    let changes = changes.into_inner();
    if let Err(errors) = changes.validate() {
        return Ok(invalid_fields(&errors));
    }

    match service.update_emp(emp_id.into_inner(), &changes).await? {
        UpdateOutcome::Updated(_) => Ok(Msg::succeed(Empty {})),
        UpdateOutcome::NameTaken => Ok(name_taken()),
    }
}

/// GET /emp/{id}
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
) -> Result<Msg<EmpPayload>, AppError> {
    let id = id.into_inner();
    let emp = service
        .get_emp(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(Msg::succeed(EmpPayload { emp }))
}

/// GET /checkUser?empName=
pub async fn check_user(
    service: web::Data<EmployeeService>,
    query: web::Query<EmpNameQuery>,
) -> Result<Msg<Empty>, AppError> {
    if !is_valid_emp_name(&query.emp_name) {
        return Ok(Msg::fail(Failure::advisory("invalid username", EMP_NAME_FORMAT_MSG)));
    }

    if service.check_user(&query.emp_name).await? {
        Ok(Msg::succeed(Empty {}))
    } else {
        Ok(name_taken())
    }
}

/// GET /emps?pn=&deptId=
pub async fn get_employees(
    service: web::Data<EmployeeService>,
    query: web::Query<EmployeeListQuery>,
) -> Result<Msg<PageInfoPayload>, AppError> {
    let request = PageRequest::new(query.pn.unwrap_or(1), DEFAULT_PAGE_SIZE);
    let page = service.get_all(request, query.dept_id).await?;

    Ok(Msg::succeed(PageInfoPayload {
        page_info: PageInfo::new(page, NAVIGATE_PAGES),
    }))
}

/// POST /emp
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<NewEmployee>,
) -> Result<Msg<EmpPayload>, AppError> {
    let record = match EmployeeRecord::try_from(new_employee.into_inner()) {
        Ok(record) => record,
        Err(errors) => return Ok(invalid_fields(&errors)),
    };

    match service.save_emp(record).await? {
        SaveOutcome::Saved(emp) => Ok(Msg::succeed(EmpPayload { emp })),
        SaveOutcome::NameTaken => Ok(name_taken()),
    }
}
