use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use super::require;
use crate::auth::{self, AuthService};
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::customer;
use crate::sequencer::{self, EntityClass};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterInput {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(write_only)]
    pub password: Option<String>,
}

/// Profile edit payload. Password is the one field that may be omitted; the
/// stored hash is retained in that case.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerUpdateInput {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(write_only)]
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub message: &'static str,
    pub token: String,
}

/// Service for customer registration, login, and profile management
#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DbPool>,
    auth: Arc<AuthService>,
}

impl CustomerService {
    pub fn new(db: Arc<DbPool>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }

    /// Registers a customer. Duplicate emails are rejected before the
    /// insert; the unique index backstops the check under concurrency.
    pub async fn register(&self, input: RegisterInput) -> Result<customer::Model, ServiceError> {
        input.validate()?;
        let username = require(input.username, "username")?;
        let first_name = require(input.first_name, "first_name")?;
        let last_name = require(input.last_name, "last_name")?;
        let email = require(input.email, "email")?;
        let phone = require(input.phone, "phone")?;
        let password = require(input.password, "password")?;

        let existing = customer::Entity::find()
            .filter(customer::Column::Email.eq(email.as_str()))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Email already registered".into()));
        }

        let password_hash = auth::hash_password(&password)?;

        let txn = self.db.begin().await?;
        let customer_id = sequencer::next_id(&txn, EntityClass::Customer).await?;
        let now = Utc::now();

        let created = customer::ActiveModel {
            customer_id: Set(customer_id),
            username: Set(username),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            phone: Set(phone),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|err| match ServiceError::from_write(err) {
            ServiceError::Conflict(_) => ServiceError::Conflict("Email already registered".into()),
            other => other,
        })?;
        txn.commit().await?;

        info!(customer_id = %created.customer_id, "customer registered");
        Ok(created)
    }

    /// Authenticates either the configured administrative account or a
    /// registered customer. The response never distinguishes an unknown
    /// email from a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ServiceError> {
        if self.auth.is_admin_login(email, password)? {
            let token = self.auth.issue_admin(email)?;
            info!("administrator logged in");
            return Ok(LoginOutcome {
                message: "Welcome Admin",
                token,
            });
        }

        let customer = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::AuthError("Invalid email or password".into()))?;

        if !auth::verify_password(password, &customer.password_hash)? {
            return Err(ServiceError::AuthError("Invalid email or password".into()));
        }

        let token = self.auth.issue_customer(&customer)?;
        info!(customer_id = %customer.customer_id, "customer logged in");
        Ok(LoginOutcome {
            message: "Login successful",
            token,
        })
    }

    pub async fn get(&self, id: &str) -> Result<customer::Model, ServiceError> {
        customer::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))
    }

    /// Full-overwrite profile update, except the password: when absent, the
    /// prior hash is retained.
    pub async fn update(
        &self,
        id: &str,
        input: CustomerUpdateInput,
    ) -> Result<customer::Model, ServiceError> {
        input.validate()?;
        let existing = self.get(id).await?;

        let password_hash = match input.password {
            Some(password) => auth::hash_password(&password)?,
            None => existing.password_hash.clone(),
        };

        let mut active: customer::ActiveModel = existing.into();
        active.username = Set(require(input.username, "username")?);
        active.first_name = Set(require(input.first_name, "first_name")?);
        active.last_name = Set(require(input.last_name, "last_name")?);
        active.email = Set(require(input.email, "email")?);
        active.phone = Set(require(input.phone, "phone")?);
        active.password_hash = Set(password_hash);
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(ServiceError::from_write)?;
        info!(customer_id = %updated.customer_id, "customer profile updated");
        Ok(updated)
    }
}
