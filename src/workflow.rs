//! workflow.rs
//!
//! Fail-fast sequencer for vendor call chains.
//!
//! Each step is one future returning `Result<T, Wso2Error>`; its typed output is
//! handed back to the caller, which feeds it into the next step. The first
//! failure is turned into a `StepFailure` and propagated with `?`, so later
//! steps are never started. Once a step has failed, the sequencer refuses to
//! poll any further step even if the caller ignores the error.

use std::fmt;
use std::future::Future;
use tracing::{error, info, warn};

use wso2_rs::Wso2Error;

#[derive(Debug)]
pub struct StepFailure {
    pub workflow: String,
    pub index: usize,
    pub total: usize,
    pub step: String,
    pub source: Wso2Error,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: step {}/{} '{}' failed: {}",
            self.workflow, self.index, self.total, self.step, self.source
        )
    }
}

impl std::error::Error for StepFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub workflow: String,
    pub completed: usize,
    pub warnings: Vec<String>,
}

pub struct Sequencer {
    name: String,
    total: usize,
    started: usize,
    completed: usize,
    failed: bool,
    warnings: Vec<String>,
}

impl Sequencer {
    pub fn new(name: impl Into<String>, total: usize) -> Self {
        Self {
            name: name.into(),
            total,
            started: 0,
            completed: 0,
            failed: false,
            warnings: Vec::new(),
        }
    }

    /// Run one step; any error aborts the workflow.
    pub async fn step<T, F>(&mut self, name: &str, fut: F) -> Result<T, StepFailure>
    where
        F: Future<Output = Result<T, Wso2Error>>,
    {
        let index = self.begin(name)?;
        match fut.await {
            Ok(value) => {
                self.complete(index, name);
                Ok(value)
            }
            Err(e) => Err(self.fail(index, name, e)),
        }
    }

    /// Run one create step where "already exists" is only a warning.
    ///
    /// Returns `Ok(None)` for the tolerated conflict.
    pub async fn step_tolerating_conflict<T, F>(
        &mut self,
        name: &str,
        fut: F,
    ) -> Result<Option<T>, StepFailure>
    where
        F: Future<Output = Result<T, Wso2Error>>,
    {
        let index = self.begin(name)?;
        match fut.await {
            Ok(value) => {
                self.complete(index, name);
                Ok(Some(value))
            }
            Err(e) if e.is_already_exists() => {
                warn!(workflow = %self.name, "[{}/{}] {} ... already exists, continuing", index, self.total, name);
                self.warnings.push(format!("{name}: already exists"));
                self.completed += 1;
                Ok(None)
            }
            Err(e) => Err(self.fail(index, name, e)),
        }
    }

    pub fn finish(self) -> RunSummary {
        if self.warnings.is_empty() {
            info!(workflow = %self.name, "{} step(s) done", self.completed);
        } else {
            info!(
                workflow = %self.name,
                "{} step(s) done, {} warning(s)",
                self.completed,
                self.warnings.len()
            );
        }
        RunSummary {
            workflow: self.name,
            completed: self.completed,
            warnings: self.warnings,
        }
    }

    fn begin(&mut self, name: &str) -> Result<usize, StepFailure> {
        self.started += 1;
        let index = self.started;
        if self.total < index {
            self.total = index;
        }
        if self.failed {
            return Err(StepFailure {
                workflow: self.name.clone(),
                index,
                total: self.total,
                step: name.to_string(),
                source: Wso2Error::Other("not run: an earlier step failed".to_string()),
            });
        }
        Ok(index)
    }

    fn complete(&mut self, index: usize, name: &str) {
        self.completed += 1;
        info!(workflow = %self.name, "[{}/{}] {} ... ok", index, self.total, name);
    }

    fn fail(&mut self, index: usize, name: &str, source: Wso2Error) -> StepFailure {
        self.failed = true;
        error!(workflow = %self.name, "[{}/{}] {} ... FAILED: {}", index, self.total, name, source);
        StepFailure {
            workflow: self.name.clone(),
            index,
            total: self.total,
            step: name.to_string(),
            source,
        }
    }
}
