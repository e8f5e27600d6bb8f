mod config;
pub use config::{Config, config_path, load_config, load_config_from, save_config, save_config_to};

mod error;
pub use error::{ConfigError, InputError};

mod input;
pub use input::{InputSource, load_input, read_all_text};
