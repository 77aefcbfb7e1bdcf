// food_ordering/src/models/mod.rs

//! Data entities: catalog items, cart lines, order documents, and the location and
//! session values handed over by collaborators.

pub mod cart_line;
pub mod item;
pub mod location;
pub mod order;
pub mod session;

pub use cart_line::CartLine;
pub use item::CatalogItem;
pub use location::{AuthorizationStatus, Coordinate, Placemark};
pub use order::{GeoPoint, OrderDocument, OrderLine};
pub use session::Session;
