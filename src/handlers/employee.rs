use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeView};
use crate::repository::{DepartmentRepository, EmployeeRepository};
use crate::utils::validation::validate_payload;

pub const EMPLOYEE_NOT_FOUND: &str = "No employee with that id found.";
pub const REFERENCED_DEPARTMENT_NOT_FOUND: &str = "No department with that id found.";

#[derive(Deserialize, Serialize, Debug)]
pub struct DepartmentRef {
    #[serde(default)]
    id: i32,
}

/// Body of `POST /employees` and `PUT /employees/{id}`.
#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[validate(required)]
    first_name: Option<String>,
    #[validate(required)]
    last_name: Option<String>,
    #[validate(required, custom = "validate_department_ref")]
    department: Option<DepartmentRef>,
}

/// Id 0 means no department was supplied.
fn validate_department_ref(department: &DepartmentRef) -> Result<(), ValidationError> {
    if department.id == 0 {
        return Err(ValidationError::new("department id is required"));
    }
    Ok(())
}

struct EmployeeFields {
    first_name: String,
    last_name: String,
    department_id: i32,
}

impl EmployeePayload {
    fn into_fields(self) -> Result<EmployeeFields, AppError> {
        validate_payload(&self)?;
        match (self.first_name, self.last_name, self.department) {
            (Some(first_name), Some(last_name), Some(department)) => Ok(EmployeeFields {
                first_name,
                last_name,
                department_id: department.id,
            }),
            _ => Err(AppError::missing_fields()),
        }
    }
}

async fn find_employee(employees: &dyn EmployeeRepository, id: i32) -> Result<Employee, AppError> {
    employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))
}

async fn resolve_department(
    departments: &dyn DepartmentRepository,
    id: i32,
) -> Result<Department, AppError> {
    departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(REFERENCED_DEPARTMENT_NOT_FOUND.to_string()))
}

/// Department lookup for an employee that was already stored.
async fn department_of(
    departments: &dyn DepartmentRepository,
    employee: &Employee,
) -> Result<Department, AppError> {
    departments
        .find_by_id(employee.department_id)
        .await?
        .ok_or_else(|| dangling_reference(employee))
}

fn dangling_reference(employee: &Employee) -> AppError {
    error!(
        "employee {} references missing department {}",
        employee.id, employee.department_id
    );
    AppError::DatabaseError(format!("dangling department reference on employee {}", employee.id))
}

pub async fn get_employees(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
) -> Result<HttpResponse, AppError> {
    let rows = employees.find_all().await?;
    let by_id: HashMap<i32, Department> = departments
        .find_all()
        .await?
        .into_iter()
        .map(|department| (department.id, department))
        .collect();

    // a dangling row is skipped so the rest of the listing still loads
    let views: Vec<EmployeeView> = rows
        .into_iter()
        .filter_map(|employee| match by_id.get(&employee.department_id) {
            Some(department) => Some(EmployeeView::new(employee, department.clone())),
            None => {
                warn!(
                    "skipping employee {} with missing department {}",
                    employee.id, employee.department_id
                );
                None
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(views))
}

pub async fn get_employee(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = find_employee(employees.get_ref(), employee_id.into_inner()).await?;
    let department = department_of(departments.get_ref(), &employee).await?;

    Ok(HttpResponse::Ok().json(EmployeeView::new(employee, department)))
}

pub async fn create_employee(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let fields = payload.into_inner().into_fields()?;
    let department = resolve_department(departments.get_ref(), fields.department_id).await?;

    let employee = employees
        .save(Employee::new(fields.first_name, fields.last_name, department.id))
        .await?;
    info!("created employee {} in department {}", employee.id, department.id);

    Ok(HttpResponse::Created().json(EmployeeView::new(employee, department)))
}

/// Overwrites both names and the department reference. Answers 201 like
/// `create_employee`.
pub async fn update_employee(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
    employee_id: web::Path<i32>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let fields = payload.into_inner().into_fields()?;

    let mut employee = find_employee(employees.get_ref(), employee_id.into_inner()).await?;
    let department = resolve_department(departments.get_ref(), fields.department_id).await?;

    employee.first_name = fields.first_name;
    employee.last_name = fields.last_name;
    employee.department_id = department.id;

    let employee = employees.save(employee).await?;

    Ok(HttpResponse::Created().json(EmployeeView::new(employee, department)))
}

pub async fn delete_employee(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = find_employee(employees.get_ref(), employee_id.into_inner()).await?;
    let department = department_of(departments.get_ref(), &employee).await?;

    employees.delete(&employee).await?;
    info!("deleted employee {}", employee.id);

    Ok(HttpResponse::Ok().json(EmployeeView::new(employee, department)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> EmployeePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn complete_payload_yields_fields() {
        let fields = payload(json!({"firstName": "Ada", "lastName": "Lovelace", "department": {"id": 3}}))
            .into_fields()
            .unwrap();
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.last_name, "Lovelace");
        assert_eq!(fields.department_id, 3);
    }

    #[test]
    fn zero_or_absent_department_is_a_bad_request() {
        for value in [
            json!({"firstName": "Ada", "lastName": "Lovelace", "department": {"id": 0}}),
            json!({"firstName": "Ada", "lastName": "Lovelace", "department": {}}),
            json!({"firstName": "Ada", "lastName": "Lovelace", "department": null}),
            json!({"firstName": "Ada", "lastName": "Lovelace"}),
        ] {
            assert!(matches!(payload(value).into_fields(), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn missing_names_are_bad_requests() {
        assert!(matches!(
            payload(json!({"lastName": "Lovelace", "department": {"id": 1}})).into_fields(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            payload(json!({"firstName": "Ada", "department": {"id": 1}})).into_fields(),
            Err(AppError::BadRequest(_))
        ));
    }
}
