// Cheatsheets state managers
// Managers own in-memory state and mirror it into durable storage.

pub mod bookmark_accessor;
pub mod bookmark_persistence;
pub mod bookmark_store;
