//! Dealership API Library
//!
//! Inventory and sales management for a vehicle dealership: CRUD over
//! vehicles, subtype detail records, parts, customers, and sales, gated by
//! an admin/customer role carried in a signed token.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod models;
pub mod openapi;
pub mod sequencer;
pub mod services;

use axum::Router;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: config::AppConfig,
    pub auth: Arc<auth::AuthService>,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Wire the auth service and per-entity services over one pool.
    pub fn new(db: Arc<db::DbPool>, config: config::AppConfig) -> Self {
        let auth = Arc::new(auth::AuthService::new(auth::AuthConfig::from_app_config(
            &config,
        )));
        let services = handlers::AppServices::new(db.clone(), auth.clone());
        Self {
            db,
            config,
            auth,
            services,
        }
    }
}

/// The full `/api` surface, one nested router per entity class.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vehicles", handlers::vehicles::routes())
        .nest("/cars", handlers::cars::routes())
        .nest("/sedans", handlers::sedans::routes())
        .nest("/suvs", handlers::suvs::routes())
        .nest("/trucks", handlers::trucks::routes())
        .nest("/parts", handlers::parts::routes())
        .nest("/vehicleParts", handlers::vehicle_parts::routes())
        .nest("/user", handlers::users::routes())
        .nest("/sales", handlers::sales::routes())
}
