mod settings;

pub use settings::{Defaults, ImporterSettings, Settings, CONFIG_FILENAME};
