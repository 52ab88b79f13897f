pub mod config;
pub mod producers;
pub mod statusline;
pub mod utils;

pub use config::*;
pub use producers::*;
pub use statusline::*;
pub use utils::*;
