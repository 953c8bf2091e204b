//! Application layer: the guarded executor and the deployment pipeline.

pub mod guard;
pub mod pipeline;

pub use guard::GuardedRunner;
pub use pipeline::Pipeline;
