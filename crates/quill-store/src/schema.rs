//! Schema definitions and migration utilities.
//!
//! This module provides embedded SQL schema definitions and utilities
//! for managing database migrations.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the users table (001_users.sql).
pub const USERS_MIGRATION: &str = include_str!("../../../migrations/001_users.sql");

/// Embedded migration SQL for the documents table (002_documents.sql).
pub const DOCUMENTS_MIGRATION: &str = include_str!("../../../migrations/002_documents.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
/// Migrations check for existing objects before creating them.
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running users migration (001_users.sql)...");
    sqlx::raw_sql(USERS_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Users migration failed: {}", e)))?;

    tracing::debug!("Running documents migration (002_documents.sql)...");
    sqlx::raw_sql(DOCUMENTS_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Documents migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `documents` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'documents'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
