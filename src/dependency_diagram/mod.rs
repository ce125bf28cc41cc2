/// Domain layer - Dependency diagram model and pure services
///
/// Nothing in this layer touches the file system or spawns processes.
pub mod domain;
pub mod services;
