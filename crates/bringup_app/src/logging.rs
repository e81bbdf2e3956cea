//! Logger setup for the bring-up programs.

/// Filter used when `RUST_LOG` is not set: bring-up milestones at `info`,
/// wgpu internals only from `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Installs `env_logger`. Calling it twice is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
