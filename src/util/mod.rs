/*
 * Copyright (c) 2003-2024. Trevor Campbell and others.
 *
 * This file is part of ISS Locator.
 *
 * ISS Locator is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * ISS Locator is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with ISS Locator; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */
#![forbid(unsafe_code)]

use std::path::PathBuf;

use log::LevelFilter;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger};

pub(crate) mod info;
pub(crate) mod iss_link;
pub(crate) mod lat_long_format;
pub(crate) mod map_link;
pub(crate) mod report;

/// Terminal logging at warn plus a rolling file in the home directory at info.
/// Holding the value keeps the file flushed on exit.
pub struct Logger {
    installed: bool,
}

impl Logger {
    pub fn new() -> Self {
        let installed = match CombinedLogger::init(Self::loggers()) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Unable to initiate logger: {}", e);
                false
            }
        };
        Logger { installed }
    }

    /// False when another logger was already set, so log output goes nowhere.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    fn loggers() -> Vec<Box<dyn SharedLogger>> {
        let term_config = ConfigBuilder::new()
            .set_time_offset_to_local()
            .unwrap_or_else(|builder| builder)
            .build();
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )];

        if let Some(log_path) = Self::log_path() {
            let condition = RollingConditionBasic::new().daily().max_size(1024 * 1024);
            match BasicRollingFileAppender::new(log_path, condition, 2) {
                Ok(file) => {
                    let file_config = ConfigBuilder::new()
                        .set_location_level(LevelFilter::Error)
                        .set_time_format_rfc3339()
                        .set_time_offset_to_local()
                        .unwrap_or_else(|builder| builder)
                        .build();
                    loggers.push(WriteLogger::new(LevelFilter::Info, file_config, file));
                }
                Err(e) => eprintln!("Unable to open log file: {}", e),
            }
        }
        loggers
    }

    fn log_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(info::LOG_FILE_NAME))
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        log::logger().flush();
    }
}
