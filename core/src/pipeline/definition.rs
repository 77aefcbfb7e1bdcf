// food_ordering/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its construction.

use crate::error::PipelineError;
use crate::pipeline::control::PipelineControl;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::stage::{SkipCondition, StageDef, StageKind};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// A stage handler: takes a clone of the shared context and resolves to a control signal.
///
/// Handlers must drop any lock guard on the context before awaiting.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// An ordered list of named stages run strictly one after another against a shared context.
///
/// `Err` is the error type handlers return; it must absorb engine errors via `From<PipelineError>`.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) stages: Vec<StageDef<TData>>,
  pub(crate) handlers: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub fn new(stage_defs: &[(&str, StageKind, Option<SkipCondition<TData>>)]) -> Self {
    let stages = stage_defs
      .iter()
      .map(|(name, kind, skip_if)| StageDef {
        name: (*name).to_string(),
        kind: *kind,
        skip_if: skip_if.clone(),
      })
      .collect();

    Self {
      stages,
      handlers: HashMap::new(),
    }
  }

  pub fn stage_names(&self) -> Vec<&str> {
    self.stages.iter().map(|s| s.name.as_str()).collect()
  }

  pub(crate) fn ensure_stage_exists(&self, stage: &str) -> Result<(), PipelineError> {
    if self.stages.iter().any(|s| s.name == stage) {
      Ok(())
    } else {
      Err(PipelineError::UnknownStage {
        stage: stage.to_string(),
      })
    }
  }
}

impl<TData, Err> std::fmt::Debug for Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("stages", &self.stages)
      .field("handler_count", &self.handlers.values().map(Vec::len).sum::<usize>())
      .finish()
  }
}
