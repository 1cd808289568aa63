use std::{error::Error, path::Path};

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Uses the log4rs file when it exists, a plain console logger otherwise.
pub fn init(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if config_path.exists() {
        log4rs::init_file(config_path, Default::default())?;
    } else {
        log4rs::init_config(console_config()?)?;
        log::warn!(
            "{} not found, logging to console",
            config_path.display()
        );
    }
    Ok(())
}

fn console_config() -> Result<Config, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Ok(Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?)
}
