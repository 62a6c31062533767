use std::collections::{HashMap, HashSet, VecDeque};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    letter_set::LetterSet,
    vault::{Direction, Position, VaultMap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Entrance(usize),
    Key(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pos: Position,
    kind: NodeKind,
}

impl Node {
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn key(&self) -> Option<char> {
        match self.kind {
            NodeKind::Key(key) => Some(key),
            NodeKind::Entrance(_) => None,
        }
    }
}

/// Shortest walk from one node to a key node, with the doors standing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    to: usize,
    steps_n: usize,
    doors: LetterSet,
}

impl Connection {
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn steps_n(&self) -> usize {
        self.steps_n
    }

    pub fn doors(&self) -> &LetterSet {
        &self.doors
    }
}

/// Entrances and keys of a vault, connected by their shortest walks.
///
/// Nodes `0..entrance_n()` are entrances in row-major order, the rest are keys
/// sorted by letter.
#[derive(Debug, Clone)]
pub struct KeyGraph {
    nodes: Vec<Node>,
    connections: Vec<Vec<Connection>>,
    entrance_n: usize,
    all_keys: LetterSet,
}

impl KeyGraph {
    pub fn build(map: &VaultMap) -> Self {
        let entrances = map.entrances();
        let entrance_n = entrances.len();
        let keys = map.keys();
        let nodes = entrances
            .into_iter()
            .enumerate()
            .map(|(ind, pos)| Node {
                pos,
                kind: NodeKind::Entrance(ind),
            })
            .chain(keys.iter().map(|(key, pos)| Node {
                pos: *pos,
                kind: NodeKind::Key(*key),
            }))
            .collect::<Vec<_>>();
        let key_nodes = nodes
            .iter()
            .enumerate()
            .skip(entrance_n)
            .map(|(ind, node)| (node.pos, ind))
            .collect::<HashMap<_, _>>();

        // Each search only reads the map, so nodes are searched in parallel.
        let connections = nodes
            .par_iter()
            .enumerate()
            .map(|(ind, node)| search_connections(map, ind, &node.pos, &key_nodes))
            .collect::<Vec<_>>();
        debug!(
            node_n = nodes.len(),
            connection_n = connections.iter().map(Vec::len).sum::<usize>(),
            "Built key graph"
        );

        Self {
            nodes,
            connections,
            entrance_n,
            all_keys: keys.iter().map(|(key, _)| *key).collect(),
        }
    }

    pub fn node_n(&self) -> usize {
        self.nodes.len()
    }

    pub fn entrance_n(&self) -> usize {
        self.entrance_n
    }

    pub fn key_n(&self) -> usize {
        self.nodes.len() - self.entrance_n
    }

    pub fn node(&self, ind: usize) -> Option<&Node> {
        self.nodes.get(ind)
    }

    pub fn key_of(&self, ind: usize) -> Option<char> {
        self.node(ind).and_then(Node::key)
    }

    pub fn node_of_key(&self, key: char) -> Option<usize> {
        self.nodes.iter().position(|node| node.key() == Some(key))
    }

    pub fn connections(&self, ind: usize) -> &[Connection] {
        self.connections.get(ind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every key placed in the vault.
    pub fn all_keys(&self) -> &LetterSet {
        &self.all_keys
    }
}

fn search_connections(
    map: &VaultMap,
    from_ind: usize,
    from_pos: &Position,
    key_nodes: &HashMap<Position, usize>,
) -> Vec<Connection> {
    let mut connections = Vec::new();
    let mut search_positions = VecDeque::from([(*from_pos, 0, LetterSet::new())]);
    let mut searched_positions = HashSet::from([*from_pos]);
    while let Some((cur_pos, cur_steps_n, doors)) = search_positions.pop_front() {
        let doors = match map.tile(&cur_pos).and_then(|tile| tile.key_of_door()) {
            Some(key) => doors.with(key),
            None => doors,
        };

        if let Some(&to) = key_nodes.get(&cur_pos) {
            if to != from_ind {
                connections.push(Connection {
                    to,
                    steps_n: cur_steps_n,
                    doors,
                });
            }
        }

        // Keep walking past keys and doors, the walk itself is purely geometric.
        for next_pos in Direction::all_dirs()
            .iter()
            .flat_map(|dir| cur_pos.neighbor(*dir))
            .filter(|pos| map.can_pass(pos))
        {
            if searched_positions.insert(next_pos) {
                search_positions.push_back((next_pos, cur_steps_n + 1, doors));
            }
        }
    }

    connections
}
