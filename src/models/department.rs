use serde::Serialize;

use crate::models::employee::Employee;

/// A `departments` row. An `id` of 0 marks a row that has not been saved yet.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl Department {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Department as returned by the `/departments` endpoints.
#[derive(Serialize, Debug)]
pub struct DepartmentView {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<EmployeeSummary>,
}

/// Employee nested under a department, without its own department field.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl DepartmentView {
    pub fn new(department: Department, employees: Vec<Employee>) -> Self {
        Self {
            id: department.id,
            name: department.name,
            location: department.location,
            employees: employees.into_iter().map(EmployeeSummary::from).collect(),
        }
    }
}

impl From<Employee> for EmployeeSummary {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
        }
    }
}
