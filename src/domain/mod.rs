//! Order domain: entities, validation, summary statistics and client-side
//! ordering. Nothing in here touches storage or HTTP.

pub mod error;
pub mod order;
pub mod pagination;
pub mod sort;
pub mod summary;
pub mod validation;

pub use error::OrderError;
pub use order::{NewOrder, Order, OrderFilters, OrderInput, OrdersPage};
pub use summary::{summarize, Summary};
