use crate::error::{Result, ServiceListError};
use crate::rule::{self, MaintenanceRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// BuildParams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParams {
    #[serde(default = "default_min_distance")]
    pub min_distance: u64,
    #[serde(default = "default_max_distance")]
    pub max_distance: u64,
    #[serde(default = "default_step")]
    pub step: u64,
}

fn default_min_distance() -> u64 {
    0
}

fn default_max_distance() -> u64 {
    300_000
}

fn default_step() -> u64 {
    1000
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
            step: default_step(),
        }
    }
}

impl BuildParams {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(ServiceListError::Config(
                "step must be greater than zero".to_string(),
            ));
        }
        if self.min_distance >= self.max_distance {
            return Err(ServiceListError::Config(format!(
                "min distance {} must be below max distance {}",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }

    /// Candidate distances in `[min_distance, max_distance)`, zero excluded.
    pub fn checkpoints(&self) -> impl Iterator<Item = u64> {
        let Self {
            min_distance,
            max_distance,
            step,
        } = *self;
        std::iter::successors(Some(min_distance), move |d| d.checked_add(step))
            .take_while(move |d| *d < max_distance)
            .filter(|d| *d != 0)
    }
}

// ---------------------------------------------------------------------------
// DueEntry / Instruction
// ---------------------------------------------------------------------------

/// Actions that fall due at one checkpoint, in ascending rule-interval order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueEntry {
    pub distance: u64,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub entries: Vec<DueEntry>,
}

impl Instruction {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn action_count(&self) -> usize {
        self.entries.iter().map(|e| e.actions.len()).sum()
    }

    /// Render as a checkbox list. The distance labels the first action of an
    /// entry; later actions are indented to the same checkbox column.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let mut actions = entry.actions.iter();
            if let Some(first) = actions.next() {
                out.push_str(&format!("{:>7} :\t[ ]\t{first}\n", entry.distance));
            }
            for action in actions {
                out.push_str(&format!("\t\t\t[ ]\t{action}\n"));
            }
        }
        out
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        crate::io::save_text(path, &self.render())
    }
}

// ---------------------------------------------------------------------------
// InstructionBuilder
// ---------------------------------------------------------------------------

pub struct InstructionBuilder {
    rules: Vec<MaintenanceRule>,
}

impl InstructionBuilder {
    pub fn new(mut rules: Vec<MaintenanceRule>) -> Self {
        rule::sort_rules(&mut rules);
        Self { rules }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(rule::load_rules(path)?))
    }

    pub fn rules(&self) -> &[MaintenanceRule] {
        &self.rules
    }

    pub fn build(&self, params: &BuildParams) -> Result<Instruction> {
        params.validate()?;

        let entries: Vec<DueEntry> = params
            .checkpoints()
            .filter_map(|distance| {
                let actions: Vec<String> = self
                    .rules
                    .iter()
                    .filter(|r| r.is_due_at(distance))
                    .map(|r| r.description.clone())
                    .collect();
                (!actions.is_empty()).then_some(DueEntry { distance, actions })
            })
            .collect();

        tracing::debug!(
            rules = self.rules.len(),
            entries = entries.len(),
            min = params.min_distance,
            max = params.max_distance,
            step = params.step,
            "built checklist"
        );
        Ok(Instruction { entries })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
