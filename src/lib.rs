pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::OrderService;
pub use domain::validation::{FormOrderPolicy, OrderPolicy, ServerOrderPolicy};
pub use domain::{
    summarize, NewOrder, Order, OrderError, OrderFilters, OrderInput, OrdersPage, Summary,
};
pub use storage::{InMemoryOrderStore, OrderStore, SqliteOrderStore};
