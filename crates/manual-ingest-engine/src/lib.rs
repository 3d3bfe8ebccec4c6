pub mod io;
pub mod models;
pub mod parsing;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ParseError, parse_lines, parse_manual};
pub use store::{ManualStore, StoreError, Upsert};
