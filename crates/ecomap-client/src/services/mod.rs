//! External service adapters.

mod store;

pub use store::PointStoreService;
