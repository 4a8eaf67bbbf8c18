use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DepartmentRepository;
use crate::errors::AppError;
use crate::models::department::Department;

#[derive(Clone)]
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        PgDepartmentRepository { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let departments = sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(departments)
    }
}
