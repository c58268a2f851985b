//! Outcome of a batch initialization.

use confreg_core::Error;

/// One class that failed during [`init_for_classes`](crate::ConfigRegistry::init_for_classes).
#[derive(Debug)]
pub struct InitFailure {
    pub type_name: &'static str,
    pub error: Error,
}

/// What a batch initialization loaded and what it skipped.
#[derive(Debug, Default)]
pub struct InitReport {
    pub(crate) loaded: Vec<&'static str>,
    pub(crate) failures: Vec<InitFailure>,
}

impl InitReport {
    /// True when every class loaded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Type names that loaded, in batch order.
    pub fn loaded(&self) -> &[&'static str] {
        &self.loaded
    }

    pub fn failures(&self) -> &[InitFailure] {
        &self.failures
    }

    pub fn failure(&self, type_name: &str) -> Option<&InitFailure> {
        self.failures.iter().find(|f| f.type_name == type_name)
    }

    /// `Err` with every failure if any class failed.
    pub fn into_result(self) -> Result<Vec<&'static str>, Vec<InitFailure>> {
        if self.failures.is_empty() {
            Ok(self.loaded)
        } else {
            Err(self.failures)
        }
    }
}
