//! Schema bootstrap for the posts table

use sqlx::PgPool;

/// Create the posts table and its sort index if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running post migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS posts_created_at_idx
        ON posts (created_at DESC)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Post migrations complete");
    Ok(())
}
