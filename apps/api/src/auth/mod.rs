// Bearer-token authentication: issuing at login/signup, verification via the
// AuthUser extractor on every protected route.

pub mod extract;
pub mod handlers;
pub mod service;
pub mod token;
