pub mod engine;

pub use engine::{next_sort_config, sort_orders, SortConfig, SortDirection, SortField};
