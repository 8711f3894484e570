//! File logging. The terminal belongs to the game frame, so records go to a
//! file instead of stdout.

use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_FILE: &str = "log/snake.log";

pub fn init_log(level: LevelFilter, file_path: &str) -> anyhow::Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)
        .with_context(|| format!("Could not open log file {}", file_path))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("Invalid log configuration")?;

    log4rs::init_config(config).context("Logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_path_is_an_error() {
        // a regular file cannot hold the log directory
        let res = init_log(LevelFilter::Info, "Cargo.toml/snake.log");
        let msg = format!("{:#}", res.unwrap_err());
        assert!(msg.starts_with("Could not open log file Cargo.toml/snake.log"), "{}", msg);
    }
}
