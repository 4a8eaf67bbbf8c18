use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use empcrud_backend::config::Config;
use empcrud_backend::db::{self, PgDepartmentRepository, PgEmployeeRepository};
use empcrud_backend::handlers;
use empcrud_backend::services::{DepartmentService, EmployeeService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(io::Error::other)?;

    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;
    db::run_migrations(&pool).await.map_err(io::Error::other)?;

    let employees = web::Data::new(EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool.clone()))));
    let departments = web::Data::new(DepartmentService::new(Arc::new(PgDepartmentRepository::new(pool))));

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(employees.clone())
            .app_data(departments.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
