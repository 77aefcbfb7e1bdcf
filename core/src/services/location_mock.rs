// food_ordering/src/services/location_mock.rs
use crate::error::{OrderingError, OrderingResult};
use crate::models::{Coordinate, Placemark};
use crate::services::location::LocationProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{info, instrument, warn};

/// Reports a fixed coordinate and placemark.
#[derive(Debug)]
pub struct MockLocationProvider {
  coordinate: Coordinate,
  placemark: Placemark,
  fail_location: AtomicBool,
  fail_geocode: AtomicBool,
  permission_requests: AtomicUsize,
  location_requests: AtomicUsize,
  geocode_requests: AtomicUsize,
}

impl MockLocationProvider {
  pub fn new(coordinate: Coordinate, placemark: Placemark) -> Self {
    Self {
      coordinate,
      placemark,
      fail_location: AtomicBool::new(false),
      fail_geocode: AtomicBool::new(false),
      permission_requests: AtomicUsize::new(0),
      location_requests: AtomicUsize::new(0),
      geocode_requests: AtomicUsize::new(0),
    }
  }

  pub fn set_fail_location(&self, fail: bool) {
    self.fail_location.store(fail, Ordering::SeqCst);
  }

  pub fn set_fail_geocode(&self, fail: bool) {
    self.fail_geocode.store(fail, Ordering::SeqCst);
  }

  pub fn permission_requests(&self) -> usize {
    self.permission_requests.load(Ordering::SeqCst)
  }

  pub fn location_requests(&self) -> usize {
    self.location_requests.load(Ordering::SeqCst)
  }

  pub fn geocode_requests(&self) -> usize {
    self.geocode_requests.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
  #[instrument(skip(self))]
  async fn request_permission(&self) -> OrderingResult<()> {
    self.permission_requests.fetch_add(1, Ordering::SeqCst);
    info!("Location permission requested");
    Ok(())
  }

  #[instrument(skip(self))]
  async fn request_location(&self) -> OrderingResult<Coordinate> {
    self.location_requests.fetch_add(1, Ordering::SeqCst);
    if self.fail_location.load(Ordering::SeqCst) {
      warn!("Simulated location fix failure");
      return Err(OrderingError::Location("simulated location failure".to_string()));
    }
    Ok(self.coordinate)
  }

  #[instrument(skip(self))]
  async fn reverse_geocode(&self, coordinate: Coordinate) -> OrderingResult<Placemark> {
    self.geocode_requests.fetch_add(1, Ordering::SeqCst);
    if self.fail_geocode.load(Ordering::SeqCst) {
      warn!("Simulated reverse geocode failure");
      return Err(OrderingError::Geocode("simulated geocode failure".to_string()));
    }
    Ok(self.placemark.clone())
  }
}
