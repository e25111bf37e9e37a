// Application layer - Layout engine and dashboard use cases
pub mod capacity;
pub mod composer;
pub mod cursor;
pub mod gauge_renderer;
pub mod image_service;
pub mod image_store;
pub mod metrics;
pub mod quiet_hours;
pub mod text_renderer;
