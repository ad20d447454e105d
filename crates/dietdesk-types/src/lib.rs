pub mod error;
pub mod notification;
pub mod session;

pub use error::{Error, Result};
pub use notification::*;
pub use session::*;
