use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod capacity;
pub mod collector;
pub mod graph;
pub mod letter_set;
pub mod vault;

pub use capacity::{check_capacity, peak_occupancy, Stay};
pub use collector::{find_shortest_collect_plan, CollectPlan, CollectorsState, Pick};
pub use graph::{Connection, KeyGraph, Node, NodeKind};
pub use letter_set::LetterSet;
pub use vault::{Direction, Position, Tile, VaultMap};

#[derive(Debug)]
pub enum Error {
    EmptyMap,
    InconsistentRow(usize, usize),
    InvalidCharForMap(char),
    NoEntrance,
    DuplicateKey(char, Position, Position),
    NotSingleEntrance(usize),
    UnsplittableEntrance(Position),
    InvalidCapacityText(String),
    InvalidStayCountText(String),
    InvalidStayText(String),
    MissingStays(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyMap => write!(f, "No row in map."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoEntrance => write!(f, "No entrance in map."),
            Error::DuplicateKey(key, last_pos, pos) => write!(
                f,
                "Expect only one key({}) in map, given two({}, {}).",
                key, last_pos, pos
            ),
            Error::NotSingleEntrance(entrance_n) => write!(
                f,
                "Expect exactly one entrance to split, given {}.",
                entrance_n
            ),
            Error::UnsplittableEntrance(pos) => write!(
                f,
                "Entrance at {} isn't surrounded by open floor, can't split it.",
                pos
            ),
            Error::InvalidCapacityText(s) => write!(f, "Invalid text({}) for capacity.", s),
            Error::InvalidStayCountText(s) => write!(f, "Invalid text({}) for count of stays.", s),
            Error::InvalidStayText(s) => write!(f, "Invalid text({}) for stay.", s),
            Error::MissingStays(expect_n, given_n) => write!(
                f,
                "Expect {} stay(s) after the count line, given {}.",
                expect_n, given_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CollectCLIArgs {
    pub input_path: PathBuf,
    /// Replace the single entrance with four robots before collecting.
    #[arg(long)]
    pub split_entrance: bool,
    /// Print the order in which keys are picked up.
    #[arg(long)]
    pub show_order: bool,
}

#[derive(Debug, Parser)]
pub struct CapacityCLIArgs {
    pub input_path: PathBuf,
}

/// Input of the capacity checker: the limit and every stay to check against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityInput {
    pub max_capacity: usize,
    pub stays: Vec<Stay>,
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Shortest total steps for all robots in `map` to collect every key, `None` if some key can't be collected.
pub fn min_collect_steps_n(map: &VaultMap) -> Option<usize> {
    let graph = KeyGraph::build(map);
    find_shortest_collect_plan(&graph).map(|plan| plan.steps_n())
}

fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} from given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}

/// Reads a vault map, stopping at the first empty line.
pub fn read_vault_map<P: AsRef<Path>>(path: P) -> Result<VaultMap> {
    let lines = read_lines(&path)?;
    VaultMap::try_from_lines(
        lines
            .iter()
            .map(|s| s.trim_end())
            .take_while(|s| !s.is_empty()),
    )
    .with_context(|| format!("Failed to parse vault map in {}.", path.as_ref().display()))
}

/// Reads the capacity line, the stay count line, then exactly that many stay lines.
pub fn read_capacity_input<P: AsRef<Path>>(path: P) -> Result<CapacityInput> {
    let lines = read_lines(&path)?;
    let mut lines = lines.iter().map(|s| s.trim());
    let capacity_text = lines.next().unwrap_or_default();
    let max_capacity = capacity_text
        .parse::<usize>()
        .map_err(|_| Error::InvalidCapacityText(capacity_text.to_string()))?;
    let count_text = lines.next().unwrap_or_default();
    let stay_n = count_text
        .parse::<usize>()
        .map_err(|_| Error::InvalidStayCountText(count_text.to_string()))?;

    let stays = lines
        .take(stay_n)
        .enumerate()
        .map(|(ind, s)| {
            Stay::try_from(s).with_context(|| {
                format!(
                    "Failed to parse stay {} in given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if stays.len() != stay_n {
        return Err(Error::MissingStays(stay_n, stays.len()).into());
    }

    Ok(CapacityInput {
        max_capacity,
        stays,
    })
}
