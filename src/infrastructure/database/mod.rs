pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseSettings;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./northwind.db?mode=rwc")
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    /// Log every SQL statement through tracing
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&DatabaseSettings::default())
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(s: &DatabaseSettings) -> Self {
        Self {
            url: s.url.clone(),
            max_connections: s.max_connections,
            min_connections: s.min_connections,
            connect_timeout_secs: s.connect_timeout_secs,
            sqlx_logging: s.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            ..Default::default()
        }
    }

    /// Private in-memory SQLite database. One connection, since every
    /// connection to `:memory:` opens a separate database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

#[cfg(test)]
pub(crate) mod test_support {
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
    use sea_orm_migration::MigratorTrait;

    use super::entities::{employee, employee_territory, order, territory};
    use super::migrator::Migrator;
    use super::{init_database, DatabaseConfig};

    pub async fn memory_db() -> DatabaseConnection {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    pub async fn seed_employee(db: &DatabaseConnection, last_name: &str) -> i32 {
        let model = employee::ActiveModel {
            last_name: Set(last_name.to_string()),
            first_name: Set("Test".to_string()),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_territory(db: &DatabaseConnection, id: &str, description: &str) {
        territory::ActiveModel {
            id: Set(id.to_string()),
            description: Set(description.to_string()),
            region_id: Set(1),
        }
        .insert(db)
        .await
        .unwrap();
    }

    pub async fn assign_territory(db: &DatabaseConnection, employee_id: i32, territory_id: &str) {
        employee_territory::ActiveModel {
            employee_id: Set(employee_id),
            territory_id: Set(territory_id.to_string()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    pub async fn seed_order(db: &DatabaseConnection, id: i32, employee_id: i32) {
        order::ActiveModel {
            id: Set(id),
            customer_id: Set(Some("VINET".to_string())),
            employee_id: Set(employee_id),
            freight: Set(32.38),
            completed: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
}
