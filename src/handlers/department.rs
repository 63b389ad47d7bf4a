use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::department::{Department, DepartmentView};
use crate::models::employee::Employee;
use crate::repository::{DepartmentRepository, EmployeeRepository};
use crate::utils::validation::validate_payload;

pub const DEPARTMENT_NOT_FOUND: &str = "No departments matching that id were found";
pub const DEPARTMENT_HAS_EMPLOYEES: &str = "Department still has employees assigned.";

/// Body of `POST /departments` and `PUT /departments/{id}`. Any `id` or
/// `employees` sent by the client is ignored.
#[derive(Deserialize, Validate, Debug)]
pub struct DepartmentPayload {
    #[validate(required)]
    name: Option<String>,
    #[validate(required)]
    location: Option<String>,
}

impl DepartmentPayload {
    fn into_fields(self) -> Result<(String, String), AppError> {
        validate_payload(&self)?;
        match (self.name, self.location) {
            (Some(name), Some(location)) => Ok((name, location)),
            _ => Err(AppError::missing_fields()),
        }
    }
}

async fn find_department(
    departments: &dyn DepartmentRepository,
    id: i32,
) -> Result<Department, AppError> {
    departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(DEPARTMENT_NOT_FOUND.to_string()))
}

pub async fn get_departments(
    departments: web::Data<dyn DepartmentRepository>,
    employees: web::Data<dyn EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let rows = departments.find_all().await?;

    let mut by_department: HashMap<i32, Vec<Employee>> = HashMap::new();
    for employee in employees.find_all().await? {
        by_department.entry(employee.department_id).or_default().push(employee);
    }

    let views: Vec<DepartmentView> = rows
        .into_iter()
        .map(|department| {
            let staff = by_department.remove(&department.id).unwrap_or_default();
            DepartmentView::new(department, staff)
        })
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

pub async fn get_department(
    departments: web::Data<dyn DepartmentRepository>,
    employees: web::Data<dyn EmployeeRepository>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let department = find_department(departments.get_ref(), department_id.into_inner()).await?;
    let staff = employees.find_by_department(department.id).await?;

    Ok(HttpResponse::Ok().json(DepartmentView::new(department, staff)))
}

pub async fn create_department(
    departments: web::Data<dyn DepartmentRepository>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, AppError> {
    let (name, location) = payload.into_inner().into_fields()?;

    let department = departments.save(Department::new(name, location)).await?;
    info!("created department {}", department.id);

    Ok(HttpResponse::Created().json(DepartmentView::new(department, Vec::new())))
}

/// Overwrites name and location. Answers 201 like `create_department`.
pub async fn update_department(
    departments: web::Data<dyn DepartmentRepository>,
    employees: web::Data<dyn EmployeeRepository>,
    department_id: web::Path<i32>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, AppError> {
    let (name, location) = payload.into_inner().into_fields()?;

    let mut department = find_department(departments.get_ref(), department_id.into_inner()).await?;
    department.name = name;
    department.location = location;

    let department = departments.save(department).await?;
    let staff = employees.find_by_department(department.id).await?;

    Ok(HttpResponse::Created().json(DepartmentView::new(department, staff)))
}

/// Refuses to delete a department that employees still reference.
pub async fn delete_department(
    departments: web::Data<dyn DepartmentRepository>,
    employees: web::Data<dyn EmployeeRepository>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let department = find_department(departments.get_ref(), department_id.into_inner()).await?;

    let staff = employees.find_by_department(department.id).await?;
    if !staff.is_empty() {
        warn!(
            "refusing to delete department {} with {} employees",
            department.id,
            staff.len()
        );
        return Err(AppError::Conflict(DEPARTMENT_HAS_EMPLOYEES.to_string()));
    }

    departments.delete(&department).await?;
    info!("deleted department {}", department.id);

    Ok(HttpResponse::Ok().json(DepartmentView::new(department, Vec::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> DepartmentPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn complete_payload_yields_fields() {
        let fields = payload(serde_json::json!({"name": "Engineering", "location": "NYC", "id": 7}))
            .into_fields()
            .unwrap();
        assert_eq!(fields, ("Engineering".to_string(), "NYC".to_string()));
    }

    #[test]
    fn missing_or_null_fields_are_bad_requests() {
        for json in [
            serde_json::json!({"name": "Engineering"}),
            serde_json::json!({"location": "NYC"}),
            serde_json::json!({"name": null, "location": "NYC"}),
            serde_json::json!({}),
        ] {
            assert!(matches!(payload(json).into_fields(), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn empty_strings_are_accepted() {
        assert!(payload(serde_json::json!({"name": "", "location": ""})).into_fields().is_ok());
    }
}
