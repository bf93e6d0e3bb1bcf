pub mod error;
pub mod persistence;
pub mod repo;
pub mod selectors;
pub mod service;
