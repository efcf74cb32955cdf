//! # Validation Pipeline
//!
//! A named, ordered list of steps run against a request context before the terminal
//! handler. Each step either passes or returns the [`ApiError`] that ends the request;
//! the runner stops at the first failure, so later steps never see a request an
//! earlier step rejected.

use super::ApiError;
use std::fmt;
use tracing::debug;

type StepFn<C> = Box<dyn Fn(&C) -> Result<(), ApiError> + Send + Sync>;

/// A single named check.
pub struct Step<C> {
    name: &'static str,
    check: StepFn<C>,
}

pub struct Pipeline<C> {
    name: &'static str,
    steps: Vec<Step<C>>,
}

impl<C> Pipeline<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Appends a step. Steps run in the order they were added.
    pub fn step(
        mut self,
        name: &'static str,
        check: impl Fn(&C) -> Result<(), ApiError> + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step {
            name,
            check: Box::new(check),
        });
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name).collect()
    }

    pub fn run(&self, context: &C) -> Result<(), ApiError> {
        for step in &self.steps {
            if let Err(err) = (step.check)(context) {
                debug!(pipeline = self.name, step = step.name, error = %err, "Step failed");
                return Err(err);
            }
            debug!(pipeline = self.name, step = step.name, "Step passed");
        }
        Ok(())
    }
}

impl<C> fmt::Debug for Pipeline<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("steps", &self.step_names())
            .finish()
    }
}
