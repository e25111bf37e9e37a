// Infrastructure layer - Configuration, rasterization and storage adapters
pub mod config;
pub mod file_store;
pub mod rasterizer;
