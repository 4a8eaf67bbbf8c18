use std::sync::Arc;

use log::{debug, info};

use crate::db::criteria::EmployeeCriteria;
use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeChanges, EmployeeRecord};
use crate::models::page::{Page, PageRequest};

#[derive(Debug)]
pub enum SaveOutcome {
    Saved(Employee),
    NameTaken,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(u64),
    NameTaken,
}

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        EmployeeService { repo }
    }

    pub async fn get_all(&self, page: PageRequest, department_id: Option<i32>) -> Result<Page<Employee>, AppError> {
        debug!("Listing employees page={} size={} department={:?}", page.page, page.size, department_id);
        let criteria = match department_id {
            Some(id) => EmployeeCriteria::all().department_id_equal_to(id),
            None => EmployeeCriteria::all(),
        };
        self.repo.find_page(&criteria, page).await
    }

    pub async fn get_by_name(&self, name: &str, page: PageRequest) -> Result<Page<Employee>, AppError> {
        debug!("Searching employees by name {:?}", name);
        let criteria = EmployeeCriteria::all().name_equal_to(name);
        self.repo.find_page(&criteria, page).await
    }

    pub async fn get_emp(&self, id: i32) -> Result<Option<Employee>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// True when no employee uses `name` yet. Advisory only: the unique
    /// constraint decides at insert time.
    pub async fn check_user(&self, name: &str) -> Result<bool, AppError> {
        let count = self.repo.count(&EmployeeCriteria::all().name_equal_to(name)).await?;
        Ok(count == 0)
    }

    pub async fn save_emp(&self, record: EmployeeRecord) -> Result<SaveOutcome, AppError> {
        match self.repo.insert(&record).await {
            Ok(employee) => {
                info!("Created employee {} ({})", employee.id, employee.name);
                Ok(SaveOutcome::Saved(employee))
            }
            Err(AppError::Conflict(reason)) => {
                info!("Rejected duplicate employee name {:?}: {}", record.name, reason);
                Ok(SaveOutcome::NameTaken)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update_emp(&self, id: i32, changes: &EmployeeChanges) -> Result<UpdateOutcome, AppError> {
        match self.repo.update_selective(id, changes).await {
            Ok(rows) => {
                info!("Updated employee {} ({} row(s))", id, rows);
                Ok(UpdateOutcome::Updated(rows))
            }
            Err(AppError::Conflict(_)) => Ok(UpdateOutcome::NameTaken),
            Err(err) => Err(err),
        }
    }

    pub async fn delete_emp(&self, id: i32) -> Result<u64, AppError> {
        let rows = self.repo.delete_by_id(id).await?;
        info!("Deleted employee {} ({} row(s))", id, rows);
        Ok(rows)
    }

    pub async fn delete_batch(&self, ids: &[i32]) -> Result<u64, AppError> {
        let rows = self.repo.delete_batch(ids).await?;
        info!("Deleted employees {:?} ({} row(s))", ids, rows);
        Ok(rows)
    }
}
