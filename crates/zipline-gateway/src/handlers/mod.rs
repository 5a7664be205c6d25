mod health;
mod url;

pub use health::health_handler;
pub use url::{get_long_handler, get_short_handler, redirect_handler, root_handler};
