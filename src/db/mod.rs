pub mod criteria;
pub mod department;
pub mod employee;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::db::criteria::EmployeeCriteria;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeChanges, EmployeeRecord};
use crate::models::page::{Page, PageRequest};

pub use department::PgDepartmentRepository;
pub use employee::PgEmployeeRepository;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Typed access to the `employee` table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;

    /// Issues the count and the limited query on every call.
    async fn find_page(&self, criteria: &EmployeeCriteria, page: PageRequest) -> Result<Page<Employee>, AppError>;

    async fn count(&self, criteria: &EmployeeCriteria) -> Result<i64, AppError>;

    /// Inserts and returns the stored row with its generated id. A duplicate
    /// name surfaces as `AppError::Conflict`.
    async fn insert(&self, record: &EmployeeRecord) -> Result<Employee, AppError>;

    /// Writes only the fields present in `changes`; returns rows affected.
    async fn update_selective(&self, id: i32, changes: &EmployeeChanges) -> Result<u64, AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError>;

    async fn delete_batch(&self, ids: &[i32]) -> Result<u64, AppError>;
}

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Department>, AppError>;
}
