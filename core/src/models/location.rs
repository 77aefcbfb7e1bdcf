// food_ordering/src/models/location.rs

use serde::{Deserialize, Serialize};

/// Location permission as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
  Granted,
  Denied,
  Undetermined,
}

impl std::str::FromStr for AuthorizationStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "granted" => Ok(Self::Granted),
      "denied" => Ok(Self::Denied),
      "undetermined" => Ok(Self::Undetermined),
      other => Err(format!("unknown authorization status '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
  pub latitude: f64,
  pub longitude: f64,
}

impl Coordinate {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self { latitude, longitude }
  }
}

/// Best-effort reverse-geocoding result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
  pub name: Option<String>,
  pub locality: Option<String>,
}

impl Placemark {
  /// `"name, locality"`, with missing parts left empty.
  pub fn display_address(&self) -> String {
    format!(
      "{}, {}",
      self.name.as_deref().unwrap_or_default(),
      self.locality.as_deref().unwrap_or_default()
    )
  }
}
