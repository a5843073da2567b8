// Application layer: streak state, queries, services
// Presentation layer: app state wiring, commands, CLI

pub mod application;
pub mod presentation;
