pub mod employer;
pub mod freelancer;
pub mod job;
pub mod user;
