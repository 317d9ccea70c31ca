//! Repository layer for database operations

pub mod activities;
pub mod bookings;
pub mod products;
pub mod reports;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub products: products::ProductsRepository,
    pub bookings: bookings::BookingsRepository,
    pub reports: reports::ReportsRepository,
    pub activities: activities::ActivitiesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            products: products::ProductsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            reports: reports::ReportsRepository::new(pool.clone()),
            activities: activities::ActivitiesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
