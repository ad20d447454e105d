pub mod error;
pub mod path;
pub mod token_store;
pub mod watcher;

pub use error::{Error, Result};
pub use path::{expand_tilde, resolve_data_dir};
pub use token_store::TokenStore;
pub use watcher::{TokenEvent, TokenWatcher};
