pub mod file_repo;
pub mod in_memory_repo;
