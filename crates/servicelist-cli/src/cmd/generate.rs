use super::{build_instruction, effective_config, RunArgs};
use crate::output::print_json;
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, args: &RunArgs, output: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let mut config = effective_config(root, args)?;
    if let Some(output) = output {
        config.output = output.to_path_buf();
    }

    let dest = config.output_path(root);
    if dest == config.input_path(root) {
        anyhow::bail!(
            "failed to write checklist: output would overwrite the rule file {}",
            dest.display()
        );
    }

    // Nothing touches the output file until the whole checklist is built.
    let instruction = build_instruction(root, &config)?;
    instruction
        .save(&dest)
        .context("failed to write checklist")?;
    tracing::info!(path = %dest.display(), entries = instruction.entries.len(), "checklist saved");

    if json {
        let value = serde_json::json!({
            "output": dest.display().to_string(),
            "entries": instruction.entries.len(),
            "actions": instruction.action_count(),
        });
        print_json(&value)?;
    } else {
        println!(
            "Wrote {} checkpoints ({} actions) to {}",
            instruction.entries.len(),
            instruction.action_count(),
            dest.display()
        );
    }
    Ok(())
}
