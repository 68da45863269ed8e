mod greeting;
mod health;
mod info;

pub use greeting::greeting;
pub use health::health_check;
pub use info::service_info;
