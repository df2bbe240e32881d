pub mod context;
pub mod machine;
pub mod plan;

pub use context::InstallContext;
pub use machine::{InstallOutcome, InstallState, InstalledArtifact, Installer};
pub use plan::{plan, InstallPlan, InstallStep};
