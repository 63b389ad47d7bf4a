use serde::Serialize;

use crate::models::department::Department;

/// An `employees` row. The department is kept as a bare id and resolved by
/// the caller.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub department_id: i32,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, department_id: i32) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            department_id,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentSummary,
}

/// Department nested under an employee, without the employees back-reference.
#[derive(Serialize, Debug)]
pub struct DepartmentSummary {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl EmployeeView {
    pub fn new(employee: Employee, department: Department) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            department: DepartmentSummary {
                id: department.id,
                name: department.name,
                location: department.location,
            },
        }
    }
}
