pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;

// Re-export commonly used items
pub use api::{create_router, AppState};
pub use catalog::{Catalog, CourseRecord};
pub use config::Config;
pub use error::{AppError, Result};
