// food_ordering/src/pipeline/stage.rs

//! Stage definitions: name, failure policy and skip condition.

use std::sync::Arc;

/// Evaluated against the context before a stage runs; `true` skips the stage.
pub type SkipCondition<TData> = Arc<dyn Fn(&TData) -> bool + Send + Sync + 'static>;

/// How a failing stage affects the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
  /// A handler error ends the run and is returned to the caller.
  Required,
  /// A handler error is logged, the stage is abandoned and the run continues.
  BestEffort,
}

#[derive(Clone)]
pub struct StageDef<TData: 'static + Send + Sync> {
  pub name: String,
  pub kind: StageKind,
  pub skip_if: Option<SkipCondition<TData>>,
}

impl<TData: 'static + Send + Sync> std::fmt::Debug for StageDef<TData> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StageDef")
      .field("name", &self.name)
      .field("kind", &self.kind)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
