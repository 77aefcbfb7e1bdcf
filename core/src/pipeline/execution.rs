// food_ordering/src/pipeline/execution.rs

//! `Pipeline::run()`: executes stages in order against the shared context.

use crate::error::PipelineError;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::control::{PipelineControl, PipelineResult};
use crate::pipeline::definition::Pipeline;
use crate::pipeline::stage::StageKind;
use tracing::{event, instrument, Instrument, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Runs every stage in order. Each stage starts only after the previous one resolved.
  ///
  /// A failing `Required` stage ends the run with its error. A failing `BestEffort`
  /// stage is logged and the run moves on to the next stage.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<TData>(),
      num_stages = self.stages.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (stage_idx, stage) in self.stages.iter().enumerate() {
      let stage_span = tracing::info_span!("pipeline_stage", stage = %stage.name, stage_index = stage_idx);

      if let Some(skip_if) = &stage.skip_if {
        let skip = {
          let guard = ctx_data.read();
          skip_if(&*guard)
        };
        if skip {
          event!(parent: &stage_span, Level::INFO, "Stage skipped by its skip condition.");
          continue;
        }
      }

      let handlers = match self.handlers.get(&stage.name) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ => match stage.kind {
          StageKind::BestEffort => {
            event!(parent: &stage_span, Level::DEBUG, "Best-effort stage has no handlers, skipping.");
            continue;
          }
          StageKind::Required => {
            event!(parent: &stage_span, Level::ERROR, "Required stage has no handlers.");
            return Err(Err::from(PipelineError::HandlerMissing {
              stage: stage.name.clone(),
            }));
          }
        },
      };

      for (handler_idx, handler_fn) in handlers.iter().enumerate() {
        let outcome = handler_fn(ctx_data.clone())
          .instrument(tracing::debug_span!(parent: &stage_span, "stage_handler", handler_index = handler_idx))
          .await;

        match outcome {
          Ok(PipelineControl::Continue) => {}
          Ok(PipelineControl::Stop) => {
            event!(parent: &stage_span, Level::INFO, "Pipeline stopped by a stage handler.");
            return Ok(PipelineResult::Stopped);
          }
          Err(e) => match stage.kind {
            StageKind::Required => {
              event!(parent: &stage_span, Level::ERROR, error = %e, "Required stage failed.");
              return Err(e);
            }
            StageKind::BestEffort => {
              event!(parent: &stage_span, Level::WARN, error = %e, "Best-effort stage failed, continuing.");
              break;
            }
          },
        }
      }
      event!(parent: &stage_span, Level::DEBUG, "Stage finished.");
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }
}
