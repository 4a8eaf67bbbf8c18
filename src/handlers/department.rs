use actix_web::web;

use crate::errors::AppError;
use crate::models::msg::{DeptsPayload, Msg};
use crate::services::DepartmentService;

/// GET /depts
pub async fn get_departments(service: web::Data<DepartmentService>) -> Result<Msg<DeptsPayload>, AppError> {
    let depts = service.get_depts().await?;
    Ok(Msg::succeed(DeptsPayload { depts }))
}
