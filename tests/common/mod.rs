#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use async_trait::async_trait;

use empcrud_backend::db::criteria::EmployeeCriteria;
use empcrud_backend::db::{DepartmentRepository, EmployeeRepository};
use empcrud_backend::errors::AppError;
use empcrud_backend::handlers;
use empcrud_backend::models::department::Department;
use empcrud_backend::models::employee::{Employee, EmployeeChanges, EmployeeRecord};
use empcrud_backend::models::page::{Page, PageRequest};
use empcrud_backend::services::{DepartmentService, EmployeeService};

/// Employee store that enforces the same constraints as the schema:
/// unique names and an existing department when one is referenced.
pub struct InMemoryEmployeeRepository {
    departments: Vec<Department>,
    state: Mutex<State>,
}

struct State {
    next_id: i32,
    rows: BTreeMap<i32, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new(departments: Vec<Department>) -> Self {
        InMemoryEmployeeRepository {
            departments,
            state: Mutex::new(State {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> Vec<Employee> {
        self.state.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.state.lock().unwrap().rows.keys().copied().collect()
    }

    fn department(&self, id: Option<i32>) -> Result<Option<Department>, AppError> {
        match id {
            None => Ok(None),
            Some(id) => self
                .departments
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .map(Some)
                .ok_or_else(|| AppError::BadRequest("department does not exist".to_string())),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_page(&self, criteria: &EmployeeCriteria, page: PageRequest) -> Result<Page<Employee>, AppError> {
        let state = self.state.lock().unwrap();
        let matching: Vec<&Employee> = state.rows.values().filter(|e| criteria.matches(e)).collect();
        let items = matching
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|e| (*e).clone())
            .collect();
        Ok(Page {
            items,
            total_count: matching.len() as i64,
            page: page.page,
            page_size: page.size,
        })
    }

    async fn count(&self, criteria: &EmployeeCriteria) -> Result<i64, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().filter(|e| criteria.matches(e)).count() as i64)
    }

    async fn insert(&self, record: &EmployeeRecord) -> Result<Employee, AppError> {
        let department = self.department(record.department_id)?;
        let mut state = self.state.lock().unwrap();
        if state.rows.values().any(|e| e.name == record.name) {
            return Err(AppError::Conflict("duplicate value violates uq_employee_name".to_string()));
        }
        let id = state.next_id;
        state.next_id += 1;
        let employee = Employee {
            id,
            name: record.name.clone(),
            gender: record.gender.clone(),
            email: record.email.clone(),
            department_id: record.department_id,
            department,
        };
        state.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update_selective(&self, id: i32, changes: &EmployeeChanges) -> Result<u64, AppError> {
        if changes.is_empty() {
            return Ok(0);
        }
        let department = match changes.department_id {
            Some(department_id) => Some(self.department(department_id)?),
            None => None,
        };
        let mut state = self.state.lock().unwrap();
        if !state.rows.contains_key(&id) {
            return Ok(0);
        }
        if let Some(name) = &changes.name {
            if state.rows.values().any(|e| e.id != id && e.name == *name) {
                return Err(AppError::Conflict("duplicate value violates uq_employee_name".to_string()));
            }
        }
        let employee = state.rows.get_mut(&id).unwrap();
        if let Some(name) = &changes.name {
            employee.name = name.clone();
        }
        if let Some(gender) = &changes.gender {
            employee.gender = gender.clone();
        }
        if let Some(email) = &changes.email {
            employee.email = email.clone();
        }
        if let Some(department) = department {
            employee.department_id = changes.department_id.flatten();
            employee.department = department;
        }
        Ok(1)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        Ok(self.state.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn delete_batch(&self, ids: &[i32]) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();
        Ok(ids.iter().filter(|id| state.rows.remove(*id).is_some()).count() as u64)
    }
}

pub struct InMemoryDepartmentRepository {
    departments: Vec<Department>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.departments.clone())
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        Department { id: 1, name: "Development".to_string() },
        Department { id: 2, name: "Testing".to_string() },
    ]
}

pub struct TestStore {
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub departments: Arc<InMemoryDepartmentRepository>,
}

impl TestStore {
    pub fn empty() -> Self {
        TestStore {
            employees: Arc::new(InMemoryEmployeeRepository::new(departments())),
            departments: Arc::new(InMemoryDepartmentRepository { departments: departments() }),
        }
    }

    /// `count` employees named `employee01`, `employee02`, ... with ids 1..=count,
    /// alternating between the two departments.
    pub async fn seeded(count: i32) -> Self {
        let store = TestStore::empty();
        for i in 1..=count {
            let record = EmployeeRecord {
                name: format!("employee{:02}", i),
                gender: if i % 2 == 0 { "F" } else { "M" }.to_string(),
                email: format!("employee{:02}@example.com", i),
                department_id: Some(if i % 2 == 0 { 2 } else { 1 }),
            };
            store.employees.insert(&record).await.unwrap();
        }
        store
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<ServiceRequest, Config = (), Response = ServiceResponse, Error = Error, InitError = ()>,
    > {
        let employees = EmployeeService::new(self.employees.clone());
        let departments = DepartmentService::new(self.departments.clone());
        App::new()
            .app_data(web::Data::new(employees))
            .app_data(web::Data::new(departments))
            .configure(handlers::configure)
    }
}
