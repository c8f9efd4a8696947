pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::config::Config;
pub use crate::core::errors::StudentError;
pub use crate::core::services::StudentService;
pub use crate::infrastructure::storage::in_memory::InMemoryStore;
pub use crate::infrastructure::storage::supabase::SupabaseStore;

#[cfg(test)]
mod tests;
