use std::{collections::HashMap, fmt::Display};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    Key(char),
    Door(char),
    Entrance,
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Self::Wall),
            '.' => Ok(Self::Floor),
            '@' => Ok(Self::Entrance),
            c if c.is_ascii_uppercase() => Ok(Self::Door(c)),
            c if c.is_ascii_lowercase() => Ok(Self::Key(c)),
            c => Err(Error::InvalidCharForMap(c)),
        }
    }
}

impl From<Tile> for char {
    fn from(value: Tile) -> Self {
        match value {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Key(c) | Tile::Door(c) => c,
            Tile::Entrance => '@',
        }
    }
}

impl Tile {
    pub fn can_pass(&self) -> bool {
        *self != Tile::Wall
    }

    pub fn key_of_door(&self) -> Option<char> {
        if let Self::Door(c) = self {
            Some(c.to_ascii_lowercase())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct VaultMap {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl TryFrom<&str> for VaultMap {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_lines(value.lines())
    }
}

impl Display for VaultMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n) {
            writeln!(f, "{}", row.iter().map(|t| char::from(*t)).collect::<String>())?;
        }

        Ok(())
    }
}

impl VaultMap {
    pub fn try_from_lines<'a, I: Iterator<Item = &'a str>>(iter: I) -> Result<Self, Error> {
        let mut tiles = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        let mut key_positions = HashMap::new();
        let mut has_entrance = false;
        for line in iter {
            let this_col_n = line.chars().count();
            let expect_col_n = *col_n.get_or_insert(this_col_n);
            if expect_col_n != this_col_n {
                return Err(Error::InconsistentRow(expect_col_n, this_col_n));
            }

            for (c, ch) in line.chars().enumerate() {
                let tile = Tile::try_from(ch)?;
                match tile {
                    Tile::Key(key) => {
                        let pos = Position::new(row_n, c);
                        if let Some(last_pos) = key_positions.insert(key, pos) {
                            return Err(Error::DuplicateKey(key, last_pos, pos));
                        }
                    }
                    Tile::Entrance => has_entrance = true,
                    _ => (),
                }
                tiles.push(tile);
            }
            row_n += 1;
        }

        let col_n = col_n.ok_or(Error::EmptyMap)?;
        if col_n == 0 {
            return Err(Error::EmptyMap);
        }
        if !has_entrance {
            return Err(Error::NoEntrance);
        }

        Ok(Self {
            tiles,
            row_n,
            col_n,
        })
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub fn can_pass(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| tile.can_pass())
    }

    /// Robots' start positions in row-major order.
    pub fn entrances(&self) -> Vec<Position> {
        self.positions_of(|tile| *tile == Tile::Entrance)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn entrance_n(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Entrance).count()
    }

    /// Keys with their positions, sorted by key.
    pub fn keys(&self) -> Vec<(char, Position)> {
        let mut keys = self
            .positions_of(|tile| matches!(tile, Tile::Key(_)))
            .filter_map(|(pos, tile)| match tile {
                Tile::Key(key) => Some((key, pos)),
                _ => None,
            })
            .collect::<Vec<_>>();
        keys.sort();
        keys
    }

    /// Walls off the single entrance and puts a robot in each diagonal cell, so
    /// the vault is searched by four robots.
    pub fn split_entrance(&mut self) -> Result<(), Error> {
        let entrances = self.entrances();
        if entrances.len() != 1 {
            return Err(Error::NotSingleEntrance(entrances.len()));
        }

        let center = entrances[0];
        if center.r() == 0 || center.c() == 0 {
            return Err(Error::UnsplittableEntrance(center));
        }
        let mut replacements = Vec::with_capacity(9);
        for r in (center.r() - 1)..=(center.r() + 1) {
            for c in (center.c() - 1)..=(center.c() + 1) {
                let pos = Position::new(r, c);
                match self.tile(&pos) {
                    Some(Tile::Floor) | Some(Tile::Entrance) => (),
                    _ => return Err(Error::UnsplittableEntrance(center)),
                }
                let tile = if r != center.r() && c != center.c() {
                    Tile::Entrance
                } else {
                    Tile::Wall
                };
                replacements.push((pos, tile));
            }
        }

        for (pos, tile) in replacements {
            if let Some(ind) = self.pos_to_ind(&pos) {
                self.tiles[ind] = tile;
            }
        }

        Ok(())
    }

    fn positions_of<'a, F: Fn(&Tile) -> bool + 'a>(
        &'a self,
        pred: F,
    ) -> impl Iterator<Item = (Position, Tile)> + 'a {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, tile)| pred(*tile))
            .map(move |(ind, tile)| (self.ind_to_pos(ind), *tile))
    }

    fn ind_to_pos(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}
