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

use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::earth::coordinate::Coordinate;
use crate::error::LocatorError;

/// The payload served by the open-notify `iss-now` endpoint.
/// Every field is optional here so that absent keys surface as missing fields, not parse failures.
#[derive(Deserialize, Debug)]
pub struct IssPayload {
    iss_position: Option<IssRawPosition>,
    timestamp: Option<f64>,
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct IssRawPosition {
    latitude: Option<String>,
    longitude: Option<String>,
}

impl IssPayload {
    pub fn from_json(body: &str) -> Result<Self, LocatorError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssPosition {
    latitude: String,
    longitude: String,
    position: Coordinate,
    timestamp: f64,
}

impl IssPosition {
    pub fn get_latitude(&self) -> &str {
        &self.latitude
    }

    pub fn get_longitude(&self) -> &str {
        &self.longitude
    }

    pub fn get_position(&self) -> &Coordinate {
        &self.position
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }
}

pub fn fetch_payload(url: &str, timeout: Duration) -> Result<IssPayload, LocatorError> {
    info!("Fetching ISS position from {}", url);
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    let response = agent.get(url).call()?;
    let body = response
        .into_string()
        .map_err(|e| LocatorError::Network(e.to_string()))?;
    debug!("Received {} bytes", body.len());
    IssPayload::from_json(&body)
}

/// Returns the raw latitude and longitude strings exactly as the payload carried them.
pub fn extract_coordinates(payload: &IssPayload) -> Result<(String, String), LocatorError> {
    let position = payload
        .iss_position
        .as_ref()
        .ok_or(LocatorError::MissingField("iss_position"))?;
    let latitude = position
        .latitude
        .clone()
        .ok_or(LocatorError::MissingField("iss_position.latitude"))?;
    let longitude = position
        .longitude
        .clone()
        .ok_or(LocatorError::MissingField("iss_position.longitude"))?;
    Ok((latitude, longitude))
}

pub fn extract_position(payload: &IssPayload) -> Result<IssPosition, LocatorError> {
    let (latitude, longitude) = extract_coordinates(payload)?;
    let timestamp = payload
        .timestamp
        .ok_or(LocatorError::MissingField("timestamp"))?;
    match payload.message.as_deref() {
        Some("success") | None => {}
        Some(other) => warn!("ISS position service reported '{}'", other),
    }
    let position = Coordinate::parse(&latitude, &longitude)?;
    debug!(
        "ISS at {:.4}, {:.4} (timestamp {})",
        position.get_latitude(),
        position.get_longitude(),
        timestamp
    );
    Ok(IssPosition {
        latitude,
        longitude,
        position,
        timestamp,
    })
}
