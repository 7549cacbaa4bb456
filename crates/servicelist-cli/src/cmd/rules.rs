use super::{effective_config, RunArgs};
use crate::output::{print_json, print_table};
use anyhow::Context;
use servicelist_core::rule::load_rules;
use std::path::Path;

pub fn run(root: &Path, input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let args = RunArgs {
        input: input.map(Path::to_path_buf),
        ..RunArgs::default()
    };
    let config = effective_config(root, &args)?;
    let path = config.input_path(root);
    let rules = load_rules(&path).context("failed to load rules")?;

    if json {
        print_json(&rules)?;
        return Ok(());
    }

    if rules.is_empty() {
        println!("No maintenance rules in {}.", path.display());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rules
        .iter()
        .map(|r| vec![r.interval.to_string(), r.description.clone()])
        .collect();
    print_table(&["INTERVAL", "DESCRIPTION"], &rows);
    Ok(())
}
