use sqlx::{Postgres, QueryBuilder};

use crate::models::employee::Employee;

/// Ad hoc filter over the `employee` table, rendered as a `WHERE` clause
/// against the `e` alias.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeCriteria {
    predicates: Vec<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    NameEqualTo(String),
    DepartmentIdEqualTo(i32),
}

impl EmployeeCriteria {
    /// Matches every employee.
    pub fn all() -> Self {
        EmployeeCriteria::default()
    }

    pub fn name_equal_to(mut self, name: impl Into<String>) -> Self {
        self.predicates.push(Predicate::NameEqualTo(name.into()));
        self
    }

    pub fn department_id_equal_to(mut self, department_id: i32) -> Self {
        self.predicates.push(Predicate::DepartmentIdEqualTo(department_id));
        self
    }

    pub fn push_where(&self, query: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::NameEqualTo(name) => {
                    query.push("e.name = ").push_bind(name.clone());
                }
                Predicate::DepartmentIdEqualTo(department_id) => {
                    query.push("e.department_id = ").push_bind(*department_id);
                }
            }
        }
    }

    /// Evaluates the criteria against an already loaded employee.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.predicates.iter().all(|predicate| match predicate {
            Predicate::NameEqualTo(name) => employee.name == *name,
            Predicate::DepartmentIdEqualTo(department_id) => employee.department_id == Some(*department_id),
        })
    }
}
