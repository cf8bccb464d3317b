// Persistence layer: one trait per aggregate, each backed by a Postgres
// implementation. Services hold the traits as Arc<dyn ...>, wired in main,
// so every flow can be exercised against mock stores.

pub mod applications;
pub mod employers;
pub mod freelancers;
pub mod jobs;
pub mod roster;
pub mod skills;
pub mod users;
pub mod visibility;
