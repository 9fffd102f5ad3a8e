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

use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::{Local, TimeZone};
use log::{error, info};

use error::LocatorError;
use preference::{Config, PreferenceManager};
use util::iss_link::IssPayload;
use util::{info as app_info, iss_link, map_link, report, Logger};

mod earth;
mod error;
mod preference;
mod util;

fn main() -> ExitCode {
    let logger = Logger::new();
    info!("{} {} starting", app_info::PROGRAM_NAME, app_info::VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = Config::resolve(&args, &PreferenceManager::load()).and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if !logger.is_installed() {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), LocatorError> {
    let payload = iss_link::fetch_payload(&config.url, config.timeout)?;
    let map_url = print_position(&payload, config.zoom, &Local, &mut io::stdout().lock())?;

    if config.open_browser {
        map_link::open_in_browser(&map_url)?;
    } else {
        info!("Map available at {}", map_url);
    }
    Ok(())
}

/// Writes the report for `payload` to `out` and returns the map url.
/// Nothing is written unless every field was extracted and converted.
fn print_position<Tz, W>(
    payload: &IssPayload,
    zoom: u8,
    tz: &Tz,
    out: &mut W,
) -> Result<String, LocatorError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    W: Write,
{
    let position = iss_link::extract_position(payload)?;
    let map_url = map_link::map_url(position.get_latitude(), position.get_longitude(), zoom)?;
    let text = report::format_report(&position, tz)?;
    writeln!(out, "{}", text).map_err(|e| LocatorError::Output(e.to_string()))?;
    Ok(map_url)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::error::LocatorError;
    use crate::print_position;
    use crate::util::iss_link::IssPayload;

    #[test]
    fn test_print_position() {
        let payload = IssPayload::from_json(
            r#"{"iss_position": {"latitude": "51.5074", "longitude": "-0.1278"}, "timestamp": 1700000000, "message": "success"}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let url = print_position(&payload, 2, &Utc, &mut out).unwrap();
        assert_eq!(url, "https://www.google.com/maps/place/51.5074+-0.1278/@51.5074,-0.1278,2z");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("ISS-Position (2023-11-14 22:13:20)"));
    }

    #[test]
    fn test_nothing_printed_without_position() {
        let payload =
            IssPayload::from_json(r#"{"timestamp": 1700000000, "message": "success"}"#).unwrap();
        let mut out = Vec::new();
        match print_position(&payload, 2, &Utc, &mut out) {
            Err(LocatorError::MissingField(field)) => assert_eq!(field, "iss_position"),
            other => panic!("Expected missing field, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_nothing_printed_for_bad_coordinate() {
        let payload = IssPayload::from_json(
            r#"{"iss_position": {"latitude": "51", "longitude": "-0.1278"}, "timestamp": 1700000000}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            print_position(&payload, 2, &Utc, &mut out),
            Err(LocatorError::Conversion(_))
        ));
        assert!(out.is_empty());
    }
}
