mod app;
pub use app::{App, init_logging};

mod args;
pub use args::Args;

pub mod report;
