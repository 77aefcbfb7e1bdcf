// food_ordering/src/pipeline/mod.rs

//! A small staged async pipeline: named stages run strictly in sequence over a
//! shared `ContextData<T>`, each either required or best-effort.

pub mod context_data;
pub mod control;
pub mod definition;
pub mod execution;
pub mod hooks;
pub mod stage;

pub use context_data::ContextData;
pub use control::{PipelineControl, PipelineResult};
pub use definition::{Handler, Pipeline};
pub use stage::{SkipCondition, StageDef, StageKind};
