// food_ordering/src/models/session.rs

/// An anonymous session. `uid` keys the session's order document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub uid: String,
}

impl Session {
  pub fn new(uid: impl Into<String>) -> Self {
    Self { uid: uid.into() }
  }
}
