mod learning_path;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Error, Result};

/// One lesson of the learning path.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: u32,
    pub number: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Directory of the lesson under `examples/` in the tutorial repository.
    pub folder: String,
    pub tag: Option<String>,
}

/// The follow-on curriculum, linked as a whole rather than step by step.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SecondaryPhase {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Directory of the curriculum at the root of the tutorial repository.
    pub path: String,
}

/// Ordered learning path, step `n` assumes steps `1..n` are mastered.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    steps: Vec<Step>,
    secondary_phase: SecondaryPhase,
}

impl Catalog {
    /// Build a catalog, checking that steps are numbered `1..=K` in order
    /// with distinct ids and folders, and that no displayed field is empty.
    pub fn new(steps: Vec<Step>, secondary_phase: SecondaryPhase) -> Result<Self> {
        if steps.is_empty() {
            return Err(invalid("the learning path has no steps"));
        }

        let mut ids = HashSet::with_capacity(steps.len());
        let mut folders = HashSet::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            let expected = position + 1;
            if usize::try_from(step.number).ok() != Some(expected) {
                return Err(invalid(format!(
                    "step at position {} is numbered {}, expected {}",
                    position, step.number, expected
                )));
            }
            if !ids.insert(step.id) {
                return Err(invalid(format!("step id {} is used twice", step.id)));
            }
            if !folders.insert(step.folder.as_str()) {
                return Err(invalid(format!("folder `{}' is used twice", step.folder)));
            }
            let fields = [
                ("title", &step.title),
                ("subtitle", &step.subtitle),
                ("description", &step.description),
                ("folder", &step.folder),
            ];
            if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
                return Err(invalid(format!("step {} has an empty {}", step.number, name)));
            }
        }

        let phase_fields = [
            ("title", &secondary_phase.title),
            ("subtitle", &secondary_phase.subtitle),
            ("description", &secondary_phase.description),
            ("path", &secondary_phase.path),
        ];
        if let Some((name, _)) = phase_fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(invalid(format!("the secondary phase has an empty {}", name)));
        }

        Ok(Self {
            steps,
            secondary_phase,
        })
    }

    /// The compiled-in "AI Agents From Scratch" learning path.
    pub fn learning_path() -> Self {
        Self {
            steps: learning_path::steps(),
            secondary_phase: learning_path::secondary_phase(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look a step up by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Step> {
        number.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn secondary_phase(&self) -> &SecondaryPhase {
        &self.secondary_phase
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::learning_path()
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidCatalog {
        reason: reason.into(),
    }
}
