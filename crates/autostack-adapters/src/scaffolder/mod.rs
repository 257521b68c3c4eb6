//! Frontend scaffolding adapters.

mod dry_run;
mod vite;

pub use dry_run::DryRunScaffolder;
pub use vite::ViteScaffolder;
