//! Persistent order store implementation using SQLite.

use crate::domain::{NewOrder, Order, OrderFilters, OrdersPage};
use crate::storage::OrderStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product TEXT NOT NULL,
    qty INTEGER NOT NULL,
    price REAL NOT NULL
)";

/// An order store backed by a SQLite connection pool.
///
/// Ids come from `AUTOINCREMENT`, so they are never reused even across
/// concurrent writers.
#[derive(Clone)]
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Opens (creating if needed) the database at `database_url` and makes sure
    /// the `orders` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        // Every connection to `:memory:` is its own database, so keep exactly
        // one and never let the pool recycle it.
        let pool = if is_memory_url(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options)
                .await?
        };

        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Cheap round trip used by the preflight check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<Order> {
        let result = sqlx::query("INSERT INTO orders (product, qty, price) VALUES (?, ?, ?)")
            .bind(order.product())
            .bind(order.qty())
            .bind(order.price())
            .execute(&self.pool)
            .await?;
        Ok(order.into_order(result.last_insert_rowid()))
    }

    async fn query(&self, filters: &OrderFilters) -> Result<OrdersPage> {
        let pattern = filters.product.as_deref().map(like_pattern);
        // SQLite only accepts OFFSET after LIMIT; -1 means "no limit".
        let limit = filters.limit.map(i64::try_from).transpose()?.unwrap_or(-1);
        let offset = i64::try_from(filters.offset)?;

        // Count and page are read in one transaction so `total` matches the rows.
        let mut tx = self.pool.begin().await?;

        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) AS total FROM orders");
        push_product_filter(&mut count, pattern.as_deref());
        let total: i64 = count.build().fetch_one(&mut *tx).await?.try_get("total")?;

        let mut select = QueryBuilder::<Sqlite>::new("SELECT id, product, qty, price FROM orders");
        push_product_filter(&mut select, pattern.as_deref());
        select
            .push(" ORDER BY id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let rows = select.build().fetch_all(&mut *tx).await?;

        tx.commit().await?;

        let orders = rows.iter().map(row_to_order).collect::<Result<Vec<_>>>()?;
        Ok(OrdersPage {
            orders,
            total: total.max(0) as u64,
            limit: filters.limit,
            offset: filters.offset,
        })
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT id, product, qty, price FROM orders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_order).collect()
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

fn push_product_filter(builder: &mut QueryBuilder<'_, Sqlite>, pattern: Option<&str>) {
    if let Some(pattern) = pattern {
        builder
            .push(" WHERE product LIKE ")
            .push_bind(pattern.to_string())
            .push(" ESCAPE '\\'");
    }
}

/// `%needle%` with LIKE wildcards in the needle matched literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn row_to_order(row: &SqliteRow) -> Result<Order> {
    Ok(Order {
        id: row.try_get("id")?,
        product: row.try_get("product")?,
        qty: row.try_get("qty")?,
        price: row.try_get("price")?,
    })
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
