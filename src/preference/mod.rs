use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};
use preferences::{AppInfo, Preferences, PreferencesMap};

use crate::error::LocatorError;
use crate::util::map_link::{check_zoom, DEFAULT_ZOOM};

const PREFS_PATH: &str = "locator";
const APP_INFO: AppInfo = AppInfo {
    name: "iss-locator",
    author: "shartrec.com",
};

pub const DEFAULT_URL: &str = "http://api.open-notify.org/iss-now.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Preference constants
pub const API_URL: &str = "Api.url";
pub const MAP_ZOOM: &str = "Map.zoom";
pub const SHOW_MAP_IN_BROWSER: &str = "Map.showInBrowser";
pub const HTTP_TIMEOUT_SECS: &str = "Http.timeoutSecs";

pub struct PreferenceManager {
    preferences: PreferencesMap,
}

impl PreferenceManager {
    pub fn load() -> Self {
        let preferences = match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
            Ok(map) => map,
            Err(e) => {
                info!("Using default preferences, unable to load stored ones: {}", e);
                PreferencesMap::new()
            }
        };
        PreferenceManager { preferences }
    }

    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.preferences.get(key) {
            Some(s) => match s.parse::<T>() {
                Ok(i) => Some(i),
                Err(_e) => {
                    warn!("Ignoring preference {} with unusable value '{}'", key, s);
                    None
                }
            },
            None => None,
        }
    }
}

/// Settings for one run, resolved from the command line over stored preferences over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub zoom: u8,
    pub timeout: Duration,
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            zoom: DEFAULT_ZOOM,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            open_browser: true,
        }
    }
}

impl Config {
    /// `args` excludes the program name. A single positional argument replaces the API url.
    pub fn resolve(args: &[String], prefs: &PreferenceManager) -> Result<Self, LocatorError> {
        if args.len() > 1 {
            return Err(LocatorError::Config(format!(
                "expected at most one argument (the API url), got {}",
                args.len()
            )));
        }
        let defaults = Config::default();
        let url = match args.first() {
            Some(url) => url.clone(),
            None => prefs.get::<String>(API_URL).unwrap_or(defaults.url),
        };
        if url.trim().is_empty() {
            return Err(LocatorError::Config("API url is empty".to_string()));
        }
        let zoom = check_zoom(prefs.get::<u8>(MAP_ZOOM).unwrap_or(defaults.zoom))?;
        let timeout = prefs
            .get::<u64>(HTTP_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let open_browser = prefs
            .get::<bool>(SHOW_MAP_IN_BROWSER)
            .unwrap_or(defaults.open_browser);
        Ok(Config {
            url,
            zoom,
            timeout,
            open_browser,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use preferences::PreferencesMap;

    use crate::preference::{
        Config, PreferenceManager, API_URL, DEFAULT_URL, HTTP_TIMEOUT_SECS, MAP_ZOOM,
        SHOW_MAP_IN_BROWSER,
    };

    fn manager(entries: &[(&str, &str)]) -> PreferenceManager {
        let mut preferences = PreferencesMap::new();
        for (k, v) in entries {
            preferences.insert(k.to_string(), v.to_string());
        }
        PreferenceManager { preferences }
    }

    #[test]
    fn test_get() {
        let manager = manager(&[("Test_KEY 1", "First"), ("Test_KEY 2", "1"), ("Test_KEY 3", "24.66")]);
        assert_eq!(manager.get::<String>("Test_KEY 1"), Some("First".to_string()));
        assert_eq!(manager.get::<i32>("Test_KEY 2"), Some(1));
        assert_eq!(manager.get::<f64>("Test_KEY 3"), Some(24.66));
        assert_eq!(manager.get::<i32>("Test_KEY 1"), None);
        assert_eq!(manager.get::<i32>("absent"), None);
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&[], &manager(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.zoom, 2);
    }

    #[test]
    fn test_argument_overrides_url() {
        let prefs = manager(&[(API_URL, "http://prefs.example/iss.json")]);
        let args = vec!["http://localhost:8080/iss-now.json".to_string()];
        let config = Config::resolve(&args, &prefs).unwrap();
        assert_eq!(config.url, "http://localhost:8080/iss-now.json");

        let config = Config::resolve(&[], &prefs).unwrap();
        assert_eq!(config.url, "http://prefs.example/iss.json");
    }

    #[test]
    fn test_preferences_applied() {
        let prefs = manager(&[(MAP_ZOOM, "7"), (HTTP_TIMEOUT_SECS, "3"), (SHOW_MAP_IN_BROWSER, "false")]);
        let config = Config::resolve(&[], &prefs).unwrap();
        assert_eq!(config.zoom, 7);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(!config.open_browser);
    }

    #[test]
    fn test_invalid_preferences() {
        let prefs = manager(&[(MAP_ZOOM, "22")]);
        assert!(Config::resolve(&[], &prefs).is_err());

        let prefs = manager(&[(MAP_ZOOM, "close"), (HTTP_TIMEOUT_SECS, "-1")]);
        let config = Config::resolve(&[], &prefs).unwrap();
        assert_eq!(config.zoom, 2);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_too_many_arguments() {
        let args = vec!["a".to_string(), "b".to_string()];
        assert!(Config::resolve(&args, &manager(&[])).is_err());
        assert!(Config::resolve(&["  ".to_string()], &manager(&[])).is_err());
    }
}
