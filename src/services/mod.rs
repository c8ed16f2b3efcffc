pub mod bookmark;
pub mod database;
pub mod store;

// 重新导出常用类型
pub use bookmark::BookmarkService;
pub use database::PostgresStore;
pub use store::{BookmarkStore, InMemoryStore};
