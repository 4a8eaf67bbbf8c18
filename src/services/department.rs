use std::sync::Arc;

use crate::db::DepartmentRepository;
use crate::errors::AppError;
use crate::models::department::Department;

#[derive(Clone)]
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        DepartmentService { repo }
    }

    pub async fn get_depts(&self) -> Result<Vec<Department>, AppError> {
        self.repo.find_all().await
    }
}
