// food_ordering/src/services/location.rs

use crate::error::OrderingResult;
use crate::models::{Coordinate, Placemark};
use async_trait::async_trait;

/// Device location service.
///
/// Authorization changes are pushed to the view-model by the platform; this trait covers
/// the requests the view-model makes in response.
#[async_trait]
pub trait LocationProvider: Send + Sync {
  /// Asks the user for when-in-use permission. The answer arrives later as an
  /// authorization change.
  async fn request_permission(&self) -> OrderingResult<()>;

  /// A single coordinate fix.
  async fn request_location(&self) -> OrderingResult<Coordinate>;

  async fn reverse_geocode(&self, coordinate: Coordinate) -> OrderingResult<Placemark>;
}
