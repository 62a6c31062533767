use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vault_keys::{CollectCLIArgs, KeyGraph};

fn main() -> Result<()> {
    vault_keys::init_tracing();
    let args = CollectCLIArgs::parse();
    let mut vault_map = vault_keys::read_vault_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read vault map from given file({}).",
            args.input_path.display()
        )
    })?;
    info!(
        row_n = vault_map.row_n(),
        col_n = vault_map.col_n(),
        "Loaded vault map"
    );

    if args.split_entrance {
        vault_map
            .split_entrance()
            .context("Failed to split the entrance of given vault.")?;
    }

    let graph = KeyGraph::build(&vault_map);
    if let Some(plan) = vault_keys::find_shortest_collect_plan(&graph) {
        println!(
            "The shortest path in given vault to collect {} key(s) with {} robot(s) has {} steps.",
            graph.key_n(),
            graph.entrance_n(),
            plan.steps_n()
        );
        if args.show_order {
            println!("Keys are collected in order {}.", plan.key_order());
            for pick in plan.picks() {
                println!("  {}", pick);
            }
        }
    } else {
        println!("No solution found");
    }

    Ok(())
}
