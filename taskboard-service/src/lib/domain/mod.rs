pub mod errors;
pub mod ports;
pub mod project;
pub mod task;
pub mod user;
