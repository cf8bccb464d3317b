pub mod handlers;
pub mod service;

pub use service::FreelancerService;
