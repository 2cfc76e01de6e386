pub mod assembler;
pub mod coordinator;
pub mod worker;

#[cfg(feature = "test-support")]
pub mod testutil;

pub use assembler::{site, site_with_config};
pub use worker::WorkerContext;
