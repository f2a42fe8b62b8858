pub mod logging;
pub mod terminal;

pub use logging::init_logging;
pub use terminal::sanitize_label;
