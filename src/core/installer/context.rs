use crate::core::downloader::Fetch;
use crate::core::environment::RunnerEnvironment;
use crate::core::platform::Platform;
use crate::core::process::Run;

/// Everything an install needs from the outside world.
pub struct InstallContext<'a> {
    pub platform: Platform,
    pub fetcher: &'a dyn Fetch,
    pub runner: &'a dyn Run,
    pub environment: &'a dyn RunnerEnvironment,
}
