use super::{build_instruction, effective_config, RunArgs};
use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, args: &RunArgs, json: bool) -> anyhow::Result<()> {
    let config = effective_config(root, args)?;
    let instruction = build_instruction(root, &config)?;

    if json {
        print_json(&instruction)?;
    } else {
        print!("{}", instruction.render());
    }
    Ok(())
}
