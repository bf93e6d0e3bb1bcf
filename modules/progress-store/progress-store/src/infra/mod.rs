pub mod storage;

pub use storage::file_repo::FileStorage;
pub use storage::in_memory_repo::InMemoryStorage;
