use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vault_keys::CapacityCLIArgs;

fn main() -> Result<()> {
    vault_keys::init_tracing();
    let args = CapacityCLIArgs::parse();
    let input = vault_keys::read_capacity_input(&args.input_path).with_context(|| {
        format!(
            "Failed to read stays from given file({}).",
            args.input_path.display()
        )
    })?;
    info!(
        max_capacity = input.max_capacity,
        stay_n = input.stays.len(),
        "Loaded stays"
    );

    let fits = vault_keys::check_capacity(input.max_capacity, &input.stays);
    println!(
        "Given {} stay(s) {} the capacity({}), at most {} guest(s) at once: {}",
        input.stays.len(),
        if fits { "fit in" } else { "exceed" },
        input.max_capacity,
        vault_keys::peak_occupancy(&input.stays),
        if fits { "True" } else { "False" }
    );

    Ok(())
}
