// ordering_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use food_ordering::{AuthorizationStatus, Coordinate, OrderingConfig};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub ordering: OrderingConfig,

  // Simulated device: where it is and what the user answers to the location prompt.
  pub coordinate: Coordinate,
  pub authorization: AuthorizationStatus,

  // Search text typed once the catalog is loaded.
  pub search: String,
}

fn parse_var<T>(var_name: &str, default: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
  raw
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = OrderingConfig::default();
    let get_env = |var_name: &str, default: &str| env::var(var_name).unwrap_or_else(|_| default.to_string());

    let ordering = OrderingConfig::default()
      .with_items_collection(get_env("FOOD_ITEMS_COLLECTION", &defaults.items_collection))
      .with_users_collection(get_env("FOOD_USERS_COLLECTION", &defaults.users_collection))
      .with_currency(get_env("FOOD_CURRENCY", &defaults.currency_code))
      .with_refilter_after_fetch(parse_var("FOOD_REFILTER_AFTER_FETCH", "false")?);

    let latitude: f64 = parse_var("DEMO_LATITUDE", "37.7749")?;
    let longitude: f64 = parse_var("DEMO_LONGITUDE", "-122.4194")?;
    let authorization: AuthorizationStatus = parse_var("DEMO_AUTHORIZATION", "granted")?;
    let search = get_env("DEMO_SEARCH", "bur");

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      ordering,
      coordinate: Coordinate::new(latitude, longitude),
      authorization,
      search,
    })
  }
}
