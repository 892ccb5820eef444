use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

impl Logger {
    /// Installs the global logger. `RUST_LOG` still overrides `level` per module.
    pub fn init(level: LevelFilter, timestamps: bool) {
        let mut builder: Builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_default_env();

        if timestamps {
            builder.format(|buf, record| {
                let stamp = Local::now().format("%H:%M:%S%.3f").to_string();
                writeln!(
                    buf,
                    "{} {} {}",
                    stamp.dimmed(),
                    level_tag(record.level()),
                    record.args()
                )
            });
        }

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {}", e);
        }
    }
}

fn level_tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "[e]".red().bold(),
        Level::Warn => "[!]".yellow().bold(),
        Level::Info => "[*]".green(),
        Level::Debug => "[d]".blue(),
        Level::Trace => "[t]".magenta(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        Logger::init(LevelFilter::Debug, true);
        Logger::init(LevelFilter::Info, false);

        log::debug!("logger installed once");
    }
}
