pub mod handlers;
pub mod search;
pub mod service;

pub use service::JobService;
