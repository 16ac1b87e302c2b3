use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logging function type.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environmental context shared by solvers and the worker.
pub struct Environment {
    /// A source of randomness.
    pub random: Arc<dyn Random + Send + Sync>,
    /// A logger receiving insights into the optimization process.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
