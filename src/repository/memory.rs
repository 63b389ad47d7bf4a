use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::repository::{DepartmentRepository, EmployeeRepository};

/// Rows keyed by id, plus the last id handed out. Ids start at 1 and are
/// never reused, even after a delete.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> Result<i32, StoreError> {
        self.last_id = self.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        Ok(self.last_id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryDepartmentRepository {
    table: RwLock<Table<Department>>,
}

impl MemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepartmentRepository for MemoryDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut department: Department) -> Result<Department, StoreError> {
        let mut table = self.table.write().await;
        if department.id == 0 {
            department.id = table.next_id()?;
        } else if !table.rows.contains_key(&department.id) {
            return Err(StoreError::NotFound);
        }
        table.rows.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete(&self, department: &Department) -> Result<(), StoreError> {
        self.table
            .write()
            .await
            .rows
            .remove(&department.id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[derive(Debug, Default)]
pub struct MemoryEmployeeRepository {
    table: RwLock<Table<Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Employee>, StoreError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|employee| employee.department_id == department_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, StoreError> {
        let mut table = self.table.write().await;
        if employee.id == 0 {
            employee.id = table.next_id()?;
        } else if !table.rows.contains_key(&employee.id) {
            return Err(StoreError::NotFound);
        }
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError> {
        self.table
            .write()
            .await
            .rows
            .remove(&employee.id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
