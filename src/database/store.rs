//! Single-table data store over Postgres.
//!
//! Rows travel as opaque JSON objects: every read goes through
//! `row_to_json` so column handling stays schema-agnostic, and every write
//! goes through `jsonb_populate_record` so Postgres itself types each field
//! against the table's rowtype. Table and column names are always
//! compile-time constants from `resources.rs`; they are quoted anyway.
//!
//! The pool is constructed once in `main` and injected through `AppState`;
//! no global client exists. Each call is a single statement relying on the
//! database's own atomicity.

use std::time::Duration;

use serde_json::{Map, Value};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use thiserror::Error;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::resources::SortOrder;

/// Errors from the data store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The "no row matched" sentinel; mapped centrally to 404.
    #[error("no row matched")]
    NotFound,

    #[error("query timed out")]
    Timeout,

    #[error("{message}")]
    Query { message: String, details: Option<Value> },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => {
                let details = db_err
                    .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                    .and_then(|pg| pg.detail())
                    .map(|d| Value::String(d.to_string()));
                StoreError::Query { message: db_err.message().to_string(), details }
            }
            other => StoreError::Query { message: other.to_string(), details: None },
        }
    }
}

/// Connection pool plus the per-query deadline.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
    query_timeout: Duration,
}

impl Db {
    /// Connect eagerly; used by the server entry point.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = Self::pool_options(config).connect(&config.url).await?;
        Ok(Self { pool, query_timeout: Duration::from_secs(config.query_timeout_secs) })
    }

    /// Build the pool without touching the network. Tests use this so the
    /// pre-store pipeline paths can run against a router with no database.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = Self::pool_options(config).connect_lazy(&config.url)?;
        Ok(Self { pool, query_timeout: Duration::from_secs(config.query_timeout_secs) })
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
    }

    /// Ping the database to ensure connectivity.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.run(sqlx::query("SELECT 1").execute(&self.pool)).await?;
        Ok(())
    }

    /// Check whether a column exists in the deployed schema. Used once at
    /// startup to pin the workout-session sort key instead of the legacy
    /// per-request fallback query.
    pub async fn has_column(&self, table: &str, column: &str) -> Result<bool, StoreError> {
        let sql = "SELECT EXISTS (SELECT 1 FROM information_schema.columns \
                   WHERE table_name = $1 AND column_name = $2)";
        let row = self
            .run(sqlx::query(sql).bind(table).bind(column).fetch_one(&self.pool))
            .await?;
        Ok(row.try_get(0)?)
    }

    /// Select an ordered slice, optionally filtered by a foreign key.
    pub async fn list(
        &self,
        table: &str,
        order: Option<SortOrder>,
        limit: i64,
        offset: i64,
        filter: Option<(&str, Uuid)>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut inner = format!("SELECT * FROM {}", quote_ident(table));
        if let Some((fk, _)) = filter {
            inner.push_str(&format!(" WHERE {} = $1", quote_ident(fk)));
        }
        inner.push_str(&order_clause(order));
        let (l, o) = if filter.is_some() { ("$2", "$3") } else { ("$1", "$2") };
        inner.push_str(&format!(" LIMIT {} OFFSET {}", l, o));

        let sql = format!("SELECT row_to_json(t) AS row FROM ({}) t", inner);
        let mut query = sqlx::query(&sql);
        if let Some((_, id)) = filter {
            query = query.bind(id);
        }
        let rows = self
            .run(query.bind(limit).bind(offset).fetch_all(&self.pool))
            .await?;
        Ok(rows.iter().map(row_json).collect())
    }

    /// Select the junction rows for one parent, each with the joined media
    /// row embedded under a `media` key.
    pub async fn list_links(
        &self,
        junction: &str,
        parent_key: &str,
        parent: Uuid,
        order: Option<SortOrder>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Value>, StoreError> {
        let sql = format!(
            "SELECT row_to_json(t) AS row FROM (\
             SELECT l.*, row_to_json(m.*) AS media \
             FROM {junction} AS l \
             LEFT JOIN \"media\" AS m ON m.\"id\" = l.\"media_id\" \
             WHERE l.{fk} = $1{order} LIMIT $2 OFFSET $3) t",
            junction = quote_ident(junction),
            fk = quote_ident(parent_key),
            order = order_clause_qualified(order, "l"),
        );
        let rows = self
            .run(sqlx::query(&sql).bind(parent).bind(limit).bind(offset).fetch_all(&self.pool))
            .await?;
        Ok(rows.iter().map(row_json).collect())
    }

    /// Select a single row by id.
    pub async fn get(&self, table: &str, id: Uuid) -> Result<Value, StoreError> {
        let sql = format!(
            "SELECT row_to_json(t) AS row FROM (SELECT * FROM {} WHERE \"id\" = $1) t",
            quote_ident(table)
        );
        let row = self
            .run(sqlx::query(&sql).bind(id).fetch_optional(&self.pool))
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row_json(&row))
    }

    /// Insert a row from the given fields, returning the inserted row with
    /// its server-assigned id and timestamp. Omitted columns take their
    /// database defaults.
    pub async fn insert(&self, table: &str, fields: &Map<String, Value>) -> Result<Value, StoreError> {
        let columns: Vec<&str> = fields.keys().map(String::as_str).collect();
        let sql = format!(
            "INSERT INTO {table} ({cols}) \
             SELECT {src} FROM jsonb_populate_record(NULL::{table}, $1) AS r \
             RETURNING row_to_json({table}.*) AS row",
            table = quote_ident(table),
            cols = columns.iter().map(|c| quote_ident(c)).collect::<Vec<_>>().join(", "),
            src = columns.iter().map(|c| format!("r.{}", quote_ident(c))).collect::<Vec<_>>().join(", "),
        );
        let row = self
            .run(sqlx::query(&sql).bind(Value::Object(fields.clone())).fetch_one(&self.pool))
            .await?;
        Ok(row_json(&row))
    }

    /// Update a row by id with the given fields, returning the updated row.
    /// Zero rows matched is the not-found sentinel.
    pub async fn update(
        &self,
        table: &str,
        id: Uuid,
        fields: &Map<String, Value>,
    ) -> Result<Value, StoreError> {
        let assignments: Vec<String> = fields
            .keys()
            .map(|c| format!("{col} = r.{col}", col = quote_ident(c)))
            .collect();
        let sql = format!(
            "UPDATE {table} SET {sets} \
             FROM jsonb_populate_record(NULL::{table}, $1) AS r \
             WHERE {table}.\"id\" = $2 \
             RETURNING row_to_json({table}.*) AS row",
            table = quote_ident(table),
            sets = assignments.join(", "),
        );
        let row = self
            .run(sqlx::query(&sql).bind(Value::Object(fields.clone())).bind(id).fetch_optional(&self.pool))
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row_json(&row))
    }

    /// Delete a row by id. Zero rows deleted is the not-found sentinel;
    /// the 404-on-missing policy is uniform across all resources.
    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE \"id\" = $1 RETURNING \"id\"", quote_ident(table));
        self.run(sqlx::query(&sql).bind(id).fetch_optional(&self.pool))
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(())
    }

    /// Run a store future under the configured deadline.
    async fn run<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout),
        }
    }
}

fn row_json(row: &PgRow) -> Value {
    row.try_get("row").unwrap_or(Value::Null)
}

fn order_clause(order: Option<SortOrder>) -> String {
    match order {
        Some(o) => format!(
            " ORDER BY {} {}",
            quote_ident(o.column),
            if o.ascending { "ASC" } else { "DESC" }
        ),
        None => String::new(),
    }
}

fn order_clause_qualified(order: Option<SortOrder>, alias: &str) -> String {
    match order {
        Some(o) => format!(
            " ORDER BY {}.{} {}",
            alias,
            quote_ident(o.column),
            if o.ascending { "ASC" } else { "DESC" }
        ),
        None => String::new(),
    }
}

/// Quote SQL identifier to prevent injection
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
