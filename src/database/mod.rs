// ABOUTME: Database manager over a SQLite pool with raw-DDL migrations
// ABOUTME: Plan and execution storage split into per-table impl modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! SQLite-backed storage for health plans and their daily execution rows.
//! Migrations run on connect so a fresh database file is usable immediately.

mod executions;
mod plans;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for plan and execution storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_plans().await?;
        self.migrate_executions().await?;
        Ok(())
    }
}
