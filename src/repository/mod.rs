//! Data access for departments and employees.
//!
//! Each entity has one trait with a Postgres and an in-memory
//! implementation. No validation happens here.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Department>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, StoreError>;

    /// Inserts when `department.id` is 0, otherwise overwrites the row with
    /// that id. Returns the stored row.
    async fn save(&self, department: Department) -> Result<Department, StoreError>;

    async fn delete(&self, department: &Department) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError>;

    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Employee>, StoreError>;

    /// Same insert-or-overwrite rule as [`DepartmentRepository::save`].
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError>;
}
