pub mod cars;
pub mod parts;
pub mod sales;
pub mod sedans;
pub mod suvs;
pub mod trucks;
pub mod users;
pub mod vehicle_parts;
pub mod vehicles;

use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::services;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub vehicles: services::vehicles::VehicleService,
    pub cars: services::cars::CarService,
    pub sedans: services::sedans::SedanService,
    pub suvs: services::suvs::SuvService,
    pub trucks: services::trucks::TruckService,
    pub parts: services::parts::PartService,
    pub vehicle_parts: services::vehicle_parts::VehiclePartService,
    pub customers: services::customers::CustomerService,
    pub sales: services::sales::SaleService,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>, auth: Arc<AuthService>) -> Self {
        Self {
            vehicles: services::vehicles::VehicleService::new(db.clone()),
            cars: services::cars::CarService::new(db.clone()),
            sedans: services::sedans::SedanService::new(db.clone()),
            suvs: services::suvs::SuvService::new(db.clone()),
            trucks: services::trucks::TruckService::new(db.clone()),
            parts: services::parts::PartService::new(db.clone()),
            vehicle_parts: services::vehicle_parts::VehiclePartService::new(db.clone()),
            customers: services::customers::CustomerService::new(db.clone(), auth),
            sales: services::sales::SaleService::new(db),
        }
    }
}
