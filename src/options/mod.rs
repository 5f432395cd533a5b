mod store;
mod window;

pub use store::{OptionStore, SharedOptions};
pub use window::{WindowOptions, WindowOptionsBuilder};
