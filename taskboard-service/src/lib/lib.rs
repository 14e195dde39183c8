pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::errors::StoreError;
pub use domain::ports::Store;
pub use domain::project::models::Project;
pub use domain::task::models::Task;
pub use domain::task::models::TaskStatus;
pub use domain::user::models::User;
