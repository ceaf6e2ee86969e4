mod config;

pub use config::{
    Config, config_path, get_export_dir, load_config, load_config_from, resolve_export_dir,
    save_config, save_config_to,
};
