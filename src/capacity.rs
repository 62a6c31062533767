use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

/// One guest's stay. Dates are opaque text which only has to sort in time order,
/// such as ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    check_in: String,
    check_out: String,
}

impl TryFrom<&str> for Stay {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static CHECK_IN_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#""check-in"\s*:\s*"([^"]*)""#).unwrap());
        static CHECK_OUT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#""check-out"\s*:\s*"([^"]*)""#).unwrap());

        let field = |pattern: &Regex| {
            pattern
                .captures(value)
                .map(|caps| caps[1].trim().to_string())
                .ok_or_else(|| Error::InvalidStayText(value.to_string()))
        };

        Ok(Self {
            check_in: field(&CHECK_IN_PATTERN)?,
            check_out: field(&CHECK_OUT_PATTERN)?,
        })
    }
}

impl Stay {
    pub fn new(check_in: &str, check_out: &str) -> Self {
        Self {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        }
    }

    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    pub fn check_out(&self) -> &str {
        &self.check_out
    }
}

// Departures order before arrivals, so a guest leaving at the same time another
// one arrives never shares the place with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Change {
    Depart,
    Arrive,
}

impl Change {
    fn delta(&self) -> isize {
        match self {
            Change::Depart => -1,
            Change::Arrive => 1,
        }
    }
}

fn sorted_changes(stays: &[Stay]) -> Vec<(&str, Change)> {
    let mut changes = stays
        .iter()
        .flat_map(|stay| {
            [
                (stay.check_in(), Change::Arrive),
                (stay.check_out(), Change::Depart),
            ]
        })
        .collect::<Vec<_>>();
    changes.sort();
    changes
}

/// Whether the guests in `stays` never outnumber `max_capacity` at any moment.
pub fn check_capacity(max_capacity: usize, stays: &[Stay]) -> bool {
    let max_capacity = isize::try_from(max_capacity).unwrap_or(isize::MAX);
    let mut guest_n = 0isize;
    for (_, change) in sorted_changes(stays) {
        guest_n += change.delta();
        if guest_n > max_capacity {
            return false;
        }
    }

    true
}

/// Most guests present at the same moment.
pub fn peak_occupancy(stays: &[Stay]) -> usize {
    sorted_changes(stays)
        .into_iter()
        .scan(0isize, |guest_n, (_, change)| {
            *guest_n += change.delta();
            Some(*guest_n)
        })
        .max()
        .map_or(0, |n| usize::try_from(n).unwrap_or(0))
}
