use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use wpfront::config::{read_config, Config};

use crate::config_data::write_sample_cfg;
use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    if let Some(exe_dir) = exe_dir {
        if exe_dir.join(CFG_FILE_NAME).exists() {
            return Some(exe_dir.join(CFG_FILE_NAME));
        }
    }

    if let Ok(cur_dir) = env::current_dir() {
        if cur_dir.join(CFG_FILE_NAME).exists() {
            return Some(cur_dir.join(CFG_FILE_NAME));
        }
    }

    let cfg_file = dirs::config_dir()?.join(CFG_FILE_NAME);
    if cfg_file.exists() {
        return Some(cfg_file);
    }

    None
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Err("Could not find wpfront configuration".to_string()),
        Some(x) => x,
    };

    println!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("wpfront").join("log").join("server.log"))
        });
        match location {
            Some(ref location) => println!("Log enabled. Files will be written in {}", location.display()),
            None => println!("Log enabled but no location could be found. Using stdout"),
        }
        log.location = location;
        config.log = Some(log);
    } else {
        println!("Log disabled. Using stdout");
    }

    Ok(config)
}

pub(crate) fn generate_cfg(config_path: &Option<PathBuf>) -> Result<PathBuf> {
    let path: PathBuf = match config_path {
        Some(path) => path.clone(),
        None => {
            let cfg_dir = dirs::config_dir().ok_or_else(|| anyhow!("Could not find user config dir"))?;
            cfg_dir.join(CFG_FILE_NAME)
        }
    };

    write_sample_cfg(&path)?;
    Ok(path)
}
