// food_ordering/src/pipeline/hooks.rs

//! Handler registration for pipeline stages.

use crate::error::PipelineError;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::control::PipelineControl;
use crate::pipeline::definition::{Handler, Pipeline};
use std::future::Future;
use tracing::{event, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Registers a handler for `stage`. Handlers of one stage run in registration order.
  ///
  /// The handler's own error type only needs to convert into the pipeline's `Err`.
  pub fn on<F, HandlerErr>(
    &mut self,
    stage: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) -> Result<&mut Self, PipelineError>
  where
    F: Future<Output = Result<PipelineControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_stage_exists(stage)?;
    let handler: Handler<TData, Err> = Box::new(move |ctx_data| {
      let fut = handler_fn(ctx_data);
      Box::pin(async move { fut.await.map_err(Into::into) })
    });
    self.handlers.entry(stage.to_string()).or_default().push(handler);
    event!(Level::TRACE, %stage, "Stage handler registered.");
    Ok(self)
  }
}
