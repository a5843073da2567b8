// Infrastructure layer - Technical implementations
// Depends on domain layer, implements its collaborator traits

pub mod config;
pub mod http;
pub mod logging;
