//! Aggregate Gold ticket sales from a SQLite database.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use rusqlite::Connection;

const GOLD_TOTAL_SQL: &str = "SELECT SUM(units * price) FROM tickets WHERE type = 'Gold'";

pub async fn gold_total(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let db_path = ctx.data_path(params.require("input")?);
    // Opening a missing path would create an empty db; fail early instead
    anyhow::ensure!(
        db_path.is_file(),
        "sales database {} does not exist",
        db_path.display()
    );

    let query_path = db_path.clone();
    let total: f64 = tokio::task::spawn_blocking(move || -> Result<f64> {
        let conn = Connection::open(&query_path)
            .with_context(|| format!("failed to open {}", query_path.display()))?;
        let total: Option<f64> = conn
            .query_row(GOLD_TOTAL_SQL, [], |row| row.get(0))
            .context("sales query failed")?;
        total.context("no Gold ticket rows to aggregate")
    })
    .await
    .context("sales query task panicked")??;

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, total.to_string())
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Gold ticket sales calculated successfully".to_string())
}
