use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::db::criteria::EmployeeCriteria;
use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeChanges, EmployeeRecord};
use crate::models::page::{Page, PageRequest};

const SELECT_WITH_DEPARTMENT: &str = "SELECT e.id, e.name, e.gender, e.email, e.department_id, d.name AS department_name \
     FROM employee e LEFT JOIN department d ON d.id = e.department_id";

#[derive(sqlx::FromRow, Debug)]
struct EmployeeRow {
    id: i32,
    name: String,
    gender: String,
    email: String,
    department_id: Option<i32>,
    department_name: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let department = match (row.department_id, row.department_name) {
            (Some(id), Some(name)) => Some(Department { id, name }),
            _ => None,
        };
        Employee {
            id: row.id,
            name: row.name,
            gender: row.gender,
            email: row.email,
            department_id: row.department_id,
            department,
        }
    }
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_WITH_DEPARTMENT);
        query.push(" WHERE e.id = ").push_bind(id);

        let row = query
            .build_query_as::<EmployeeRow>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn find_page(&self, criteria: &EmployeeCriteria, page: PageRequest) -> Result<Page<Employee>, AppError> {
        let total_count = self.count(criteria).await?;

        let mut query = QueryBuilder::<Postgres>::new(SELECT_WITH_DEPARTMENT);
        criteria.push_where(&mut query);
        query
            .push(" ORDER BY e.id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = query
            .build_query_as::<EmployeeRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(Page {
            items: rows.into_iter().map(Employee::from).collect(),
            total_count,
            page: page.page,
            page_size: page.size,
        })
    }

    async fn count(&self, criteria: &EmployeeCriteria) -> Result<i64, AppError> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM employee e");
        criteria.push_where(&mut query);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert(&self, record: &EmployeeRecord) -> Result<Employee, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO employee (name, gender, email, department_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&record.name)
        .bind(&record.gender)
        .bind(&record.email)
        .bind(record.department_id)
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalServerError(format!("employee {} vanished after insert", id)))
    }

    async fn update_selective(&self, id: i32, changes: &EmployeeChanges) -> Result<u64, AppError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE employee SET ");
        let mut separated = query.separated(", ");

        if let Some(name) = &changes.name {
            separated.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(gender) = &changes.gender {
            separated.push("gender = ").push_bind_unseparated(gender.clone());
        }
        if let Some(email) = &changes.email {
            separated.push("email = ").push_bind_unseparated(email.clone());
        }
        if let Some(department_id) = changes.department_id {
            separated.push("department_id = ").push_bind_unseparated(department_id);
        }

        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_batch(&self, ids: &[i32]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employee WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
