use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::repository::{DepartmentRepository, EmployeeRepository};

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, StoreError> {
        let rows = sqlx::query_as::<_, Department>("SELECT id, name, location FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, StoreError> {
        let row = sqlx::query_as::<_, Department>("SELECT id, name, location FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, department: Department) -> Result<Department, StoreError> {
        if department.id == 0 {
            let row = sqlx::query_as::<_, Department>(
                "INSERT INTO departments (name, location) VALUES ($1, $2) RETURNING id, name, location",
            )
            .bind(&department.name)
            .bind(&department.location)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        }

        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $1, location = $2 WHERE id = $3 RETURNING id, name, location",
        )
        .bind(&department.name)
        .bind(&department.location)
        .bind(department.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, department: &Department) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(department.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, department_id FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        let row = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, department_id FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, department_id FROM employees WHERE department_id = $1 ORDER BY id",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        if employee.id == 0 {
            let row = sqlx::query_as::<_, Employee>(
                "INSERT INTO employees (first_name, last_name, department_id) VALUES ($1, $2, $3) \
                 RETURNING id, first_name, last_name, department_id",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(employee.department_id)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        }

        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET first_name = $1, last_name = $2, department_id = $3 WHERE id = $4 \
             RETURNING id, first_name, last_name, department_id",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.department_id)
        .bind(employee.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(employee.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
