pub mod department;
pub mod employee;

use actix_web::web;

use crate::errors::AppError;

/// Registers the route table and the extractor error handlers. The caller
/// supplies `web::Data<EmployeeService>` and `web::Data<DepartmentService>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()))
        .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()))
        .service(
            web::resource("/empName")
                .route(web::get().to(employee::search_employees)),
        )
        .service(
            web::resource("/emp")
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/emp/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employees)),
        )
        .service(
            web::resource("/checkUser")
                .route(web::get().to(employee::check_user)),
        )
        .service(
            web::resource("/emps")
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/depts")
                .route(web::get().to(department::get_departments)),
        );
}
