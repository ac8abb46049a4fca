pub mod aggregator;

pub use aggregator::{summarize, Summary};
