use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt::Display,
};

use tracing::debug;

use crate::{
    graph::{Connection, KeyGraph},
    letter_set::LetterSet,
};

/// Where every robot stands and which keys are held. Collectors in the same
/// state can finish in the same way, so only the cheapest one is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectorsState {
    robots: Vec<usize>,
    hold_keys: LetterSet,
}

impl CollectorsState {
    pub fn robots(&self) -> &[usize] {
        &self.robots
    }

    pub fn hold_keys(&self) -> &LetterSet {
        &self.hold_keys
    }
}

/// One robot walking to one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub robot: usize,
    pub key: char,
    pub steps_n: usize,
}

impl Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "robot {} picks {} after {} step(s)",
            self.robot, self.key, self.steps_n
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectPlan {
    steps_n: usize,
    picks: Vec<Pick>,
}

impl CollectPlan {
    pub fn steps_n(&self) -> usize {
        self.steps_n
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn key_order(&self) -> String {
        self.picks.iter().map(|pick| pick.key).collect()
    }
}

#[derive(Debug, Clone)]
struct Collectors {
    state: CollectorsState,
    steps_n: usize,
    picks: Vec<Pick>,
}

impl PartialEq for Collectors {
    fn eq(&self, other: &Self) -> bool {
        self.steps_n == other.steps_n
    }
}

impl Eq for Collectors {}

impl PartialOrd for Collectors {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Collectors {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.steps_n.cmp(&other.steps_n)
    }
}

impl Collectors {
    fn new(robot_n: usize) -> Self {
        Self {
            state: CollectorsState {
                robots: (0..robot_n).collect(),
                hold_keys: LetterSet::new(),
            },
            steps_n: 0,
            picks: Vec::new(),
        }
    }

    fn clone_and_move(&self, robot: usize, key: char, conn: &Connection) -> Self {
        let mut moved = self.clone();
        moved.state.robots[robot] = conn.to();
        moved.state.hold_keys.insert(key);
        moved.steps_n += conn.steps_n();
        moved.picks.push(Pick {
            robot,
            key,
            steps_n: conn.steps_n(),
        });
        moved
    }

    fn into_plan(self) -> CollectPlan {
        CollectPlan {
            steps_n: self.steps_n,
            picks: self.picks,
        }
    }
}

/// Dijkstra's search over collectors' states for the cheapest way to hold every key.
/// Returns `None` if some key can never be reached.
pub fn find_shortest_collect_plan(graph: &KeyGraph) -> Option<CollectPlan> {
    let all_keys = *graph.all_keys();
    let init_collectors = Collectors::new(graph.entrance_n());
    let mut min_steps = HashMap::from([(init_collectors.state.clone(), 0)]);
    let mut collectors_queue = BinaryHeap::from([Reverse(init_collectors)]);
    let mut expanded_n = 0usize;

    while let Some(Reverse(collectors)) = collectors_queue.pop() {
        if min_steps
            .get(&collectors.state)
            .is_some_and(|steps_n| *steps_n < collectors.steps_n)
        {
            // A cheaper collectors reached this state after this one was queued.
            continue;
        }

        if collectors.state.hold_keys == all_keys {
            debug!(expanded_n, steps_n = collectors.steps_n, "Found all keys");
            return Some(collectors.into_plan());
        }

        expanded_n += 1;
        for (robot, node) in collectors.state.robots.iter().enumerate() {
            for conn in graph.connections(*node) {
                let Some(key) = graph.key_of(conn.to()) else {
                    continue;
                };
                let hold_keys = &collectors.state.hold_keys;
                if hold_keys.contains(key) || !hold_keys.is_superset(conn.doors()) {
                    continue;
                }

                let moved = collectors.clone_and_move(robot, key, conn);
                let is_cheaper = min_steps
                    .get(&moved.state)
                    .map_or(true, |steps_n| moved.steps_n < *steps_n);
                if is_cheaper {
                    min_steps.insert(moved.state.clone(), moved.steps_n);
                    collectors_queue.push(Reverse(moved));
                }
            }
        }
    }

    debug!(expanded_n, "No way to collect all keys");
    None
}
