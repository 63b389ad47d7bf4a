pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod utils;

use std::sync::Arc;

use actix_web::web;
use sqlx::PgPool;

use crate::repository::memory::{MemoryDepartmentRepository, MemoryEmployeeRepository};
use crate::repository::postgres::{PgDepartmentRepository, PgEmployeeRepository};
use crate::repository::{DepartmentRepository, EmployeeRepository};

/// Repositories shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub departments: web::Data<dyn DepartmentRepository>,
    pub employees: web::Data<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            departments: web::Data::from(departments),
            employees: web::Data::from(employees),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgDepartmentRepository::new(pool.clone())),
            Arc::new(PgEmployeeRepository::new(pool)),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryDepartmentRepository::new()),
            Arc::new(MemoryEmployeeRepository::new()),
        )
    }

    /// Registers the repositories, the JSON body config and every route.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.departments.clone())
            .app_data(self.employees.clone())
            .app_data(web::JsonConfig::default().error_handler(utils::validation::json_error_handler));
        routes(cfg);
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/departments")
            .route(web::get().to(handlers::department::get_departments))
            .route(web::post().to(handlers::department::create_department)),
    )
    .service(
        web::resource("/departments/{id}")
            .route(web::get().to(handlers::department::get_department))
            .route(web::put().to(handlers::department::update_department))
            .route(web::delete().to(handlers::department::delete_department)),
    )
    .service(
        web::resource("/employees")
            .route(web::get().to(handlers::employee::get_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(handlers::employee::get_employee))
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    );
}
