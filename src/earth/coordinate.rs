use crate::error::LocatorError;
use crate::util::lat_long_format::LatLongFormat;

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate from decimal-degree strings, rejecting values outside the valid ranges.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, LocatorError> {
        let latitude = LatLongFormat::lat_format().parse(latitude)?;
        let longitude = LatLongFormat::long_format().parse(longitude)?;
        Ok(Coordinate::new(latitude, longitude))
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_latitude_as_string(&self) -> String {
        let formatter = LatLongFormat::lat_format();
        formatter.format(self.latitude)
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }

    pub fn get_longitude_as_string(&self) -> String {
        let formatter = LatLongFormat::long_format();
        formatter.format(self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn test_construct() {
        let result = Coordinate::new(-34.0, 151.0);
        assert_eq!(result.get_latitude(), -34.0);
        assert_eq!(result.get_longitude(), 151.0);
    }

    #[test]
    fn test_parse() {
        let result = Coordinate::parse("51.5074", "-0.1278").unwrap();
        assert_eq!(result.get_latitude(), 51.5074);
        assert_eq!(result.get_longitude(), -0.1278);
        assert_eq!(result.get_latitude_as_string(), "51\u{00b0}30'26\" N");
        assert_eq!(result.get_longitude_as_string(), "0\u{00b0}7'40\" W");
    }

    #[test]
    fn test_parse_out_of_range() {
        // 120 is a fine longitude but not a latitude
        assert!(Coordinate::parse("120.0", "10.0").is_err());
        assert!(Coordinate::parse("10.0", "120.0").is_ok());
        assert!(Coordinate::parse("10.0", "east").is_err());
    }
}
