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

use std::process::Command;

use log::info;

use crate::error::LocatorError;

pub const DEFAULT_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 21;

pub fn check_zoom(zoom: u8) -> Result<u8, LocatorError> {
    if zoom > MAX_ZOOM {
        return Err(LocatorError::Config(format!(
            "zoom level {} is outside 0..{}",
            zoom, MAX_ZOOM
        )));
    }
    Ok(zoom)
}

/// Google Maps place URL centred on the raw decimal-degree strings.
pub fn map_url(lat: &str, long: &str, zoom: u8) -> Result<String, LocatorError> {
    let zoom = check_zoom(zoom)?;
    Ok(format!(
        "https://www.google.com/maps/place/{lat}+{long}/@{lat},{long},{zoom}z"
    ))
}

pub fn open_in_browser(url: &str) -> Result<(), LocatorError> {
    info!("Opening {} in browser", url);
    let status = browser_command(url)
        .status()
        .map_err(|e| LocatorError::Browser(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(LocatorError::Browser(format!("launcher exited with {}", status)))
    }
}

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };
    #[cfg(windows)]
    let command = {
        let mut command = Command::new("cmd");
        // The empty argument is the window title `start` expects before the target
        command.args(["/C", "start", "", url]);
        command
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };
    command
}

#[cfg(test)]
mod tests {
    use super::{browser_command, map_url, DEFAULT_ZOOM};

    #[test]
    fn test_map_url() {
        assert_eq!(
            map_url("51.5074", "-0.1278", DEFAULT_ZOOM).unwrap(),
            "https://www.google.com/maps/place/51.5074+-0.1278/@51.5074,-0.1278,2z"
        );
        assert_eq!(
            map_url("-33.8688", "151.2093", 21).unwrap(),
            "https://www.google.com/maps/place/-33.8688+151.2093/@-33.8688,151.2093,21z"
        );
    }

    #[test]
    fn test_map_url_zoom_out_of_range() {
        assert!(map_url("0.0", "0.0", 22).is_err());
        assert!(map_url("0.0", "0.0", 0).is_ok());
    }

    #[test]
    fn test_browser_command_carries_url() {
        let command = browser_command("https://example.com/");
        assert!(command.get_args().any(|arg| arg == "https://example.com/"));
    }
}
