pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{posting_service::PostingService, student_service::StudentService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub posting_service: PostingService,
    pub student_service: StudentService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let posting_service = PostingService::new(pool.clone());
        let student_service = StudentService::new(pool.clone());

        Self {
            pool,
            posting_service,
            student_service,
        }
    }
}
