//! Modelos del core (ExecutionContext, SubjectRecord, SubjectFactory).

pub mod context;
pub mod record;

pub use context::ExecutionContext;
pub use record::{SubjectFactory, SubjectRecord};
