use std::fmt;
use std::sync::Arc;

use crate::build::{BuildConfig, Mode};
use crate::error::Result;

/// Caller-supplied rewrite of an assembled build configuration.
///
/// The return value replaces the input wholesale; nothing is merged back.
pub trait ConfigTransform: Send + Sync {
    fn transform(&self, config: BuildConfig, mode: Mode) -> Result<BuildConfig>;
}

impl<F> ConfigTransform for F
where
    F: Fn(BuildConfig, Mode) -> Result<BuildConfig> + Send + Sync,
{
    fn transform(&self, config: BuildConfig, mode: Mode) -> Result<BuildConfig> {
        self(config, mode)
    }
}

/// Shareable handle to a [`ConfigTransform`].
#[derive(Clone)]
pub struct TransformHook(Arc<dyn ConfigTransform>);

impl TransformHook {
    pub fn new(transform: impl ConfigTransform + 'static) -> Self {
        Self(Arc::new(transform))
    }

    pub fn apply(&self, config: BuildConfig, mode: Mode) -> Result<BuildConfig> {
        self.0.transform(config, mode)
    }
}

impl fmt::Debug for TransformHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransformHook(..)")
    }
}
