pub mod get_user;
pub mod register_user;

pub use get_user::get_user;
pub use register_user::register_user;
