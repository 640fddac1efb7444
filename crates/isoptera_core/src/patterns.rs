//! Catalog of named turmites.
//!
//! Every literal uses the bit-flag turn encoding (1 = no turn, 2 = right,
//! 4 = u-turn, 8 = left) and starts in state 0 with no final states.

use crate::error::Result;
use crate::table::TransitionTable;
use isoptera_data::{TableSpec, TurnEncoding};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

type Literal = &'static [[[u32; 3]; 2]];

const EXPANDING_FRAME: Literal = &[[[1, 8, 0], [1, 2, 1]], [[0, 2, 0], [0, 8, 1]]];
const SPIRAL: Literal = &[[[1, 1, 1], [1, 8, 0]], [[1, 2, 1], [0, 1, 0]]];
const LANGTONS_ANT: Literal = &[[[1, 2, 0], [0, 8, 0]]];
// (2, 0) is never reached: state 2 is only entered by u-turning onto a cell
// that was just marked.
const SNOWFLAKE: Literal = &[
    [[1, 8, 1], [1, 2, 0]],
    [[1, 4, 1], [1, 4, 2]],
    [[0, 1, 0], [0, 4, 0]],
];
const CHAOTIC: Literal = &[[[1, 2, 0], [1, 2, 1]], [[0, 1, 0], [0, 1, 1]]];
const TEXTURED: Literal = &[[[1, 2, 1], [1, 8, 1]], [[1, 2, 1], [0, 2, 0]]];
const DIAMOND: Literal = &[[[0, 1, 1], [0, 2, 1]], [[1, 8, 0], [0, 1, 1]]];
const FIBONACCI_SPIRAL: Literal = &[[[1, 8, 1], [1, 8, 1]], [[1, 2, 1], [0, 1, 0]]];
const BINARY_COUNTER: Literal = &[[[1, 2, 0], [0, 1, 0]]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    ExpandingFrame,
    Spiral,
    LangtonsAnt,
    Snowflake,
    Chaotic,
    Textured,
    Diamond,
    FibonacciSpiral,
    BinaryCounter,
}

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Pattern::ExpandingFrame,
        Pattern::Spiral,
        Pattern::LangtonsAnt,
        Pattern::Snowflake,
        Pattern::Chaotic,
        Pattern::Textured,
        Pattern::Diamond,
        Pattern::FibonacciSpiral,
        Pattern::BinaryCounter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::ExpandingFrame => "expanding frame",
            Pattern::Spiral => "spiral",
            Pattern::LangtonsAnt => "langton's ant",
            Pattern::Snowflake => "snowflake",
            Pattern::Chaotic => "chaotic",
            Pattern::Textured => "textured",
            Pattern::Diamond => "diamond",
            Pattern::FibonacciSpiral => "fibonacci spiral",
            Pattern::BinaryCounter => "binary counter",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Pattern::ExpandingFrame => "expanding-frame",
            Pattern::Spiral => "spiral",
            Pattern::LangtonsAnt => "langtons-ant",
            Pattern::Snowflake => "snowflake",
            Pattern::Chaotic => "chaotic",
            Pattern::Textured => "textured",
            Pattern::Diamond => "diamond",
            Pattern::FibonacciSpiral => "fibonacci-spiral",
            Pattern::BinaryCounter => "binary-counter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Pattern::ExpandingFrame => "nested square frames growing outward",
            Pattern::Spiral => "square spiral that keeps widening",
            Pattern::LangtonsAnt => "chaotic blob that settles into a diagonal highway",
            Pattern::Snowflake => "three-state crystal with sixfold-looking arms",
            Pattern::Chaotic => "irregular fill with no visible structure",
            Pattern::Textured => "woven texture filling a growing region",
            Pattern::Diamond => "diamond outline around a textured core",
            Pattern::FibonacciSpiral => "spiral whose arms grow in Fibonacci steps",
            Pattern::BinaryCounter => "counts in binary along a single row",
        }
    }

    /// Steps needed to draw the pattern on a 200x200 torus before it
    /// wraps into itself.
    pub fn iterations(self) -> u64 {
        match self {
            Pattern::ExpandingFrame => 10_211,
            Pattern::Spiral => 12_000,
            Pattern::LangtonsAnt => 11_000,
            Pattern::Snowflake => 60_000,
            Pattern::Chaotic => 100_000,
            Pattern::Textured => 80_000,
            Pattern::Diamond => 40_000,
            Pattern::FibonacciSpiral => 60_000,
            Pattern::BinaryCounter => 20_000,
        }
    }

    pub fn literal(self) -> &'static [[[u32; 3]; 2]] {
        match self {
            Pattern::ExpandingFrame => EXPANDING_FRAME,
            Pattern::Spiral => SPIRAL,
            Pattern::LangtonsAnt => LANGTONS_ANT,
            Pattern::Snowflake => SNOWFLAKE,
            Pattern::Chaotic => CHAOTIC,
            Pattern::Textured => TEXTURED,
            Pattern::Diamond => DIAMOND,
            Pattern::FibonacciSpiral => FIBONACCI_SPIRAL,
            Pattern::BinaryCounter => BINARY_COUNTER,
        }
    }

    pub fn spec(self) -> TableSpec {
        TableSpec::new(TurnEncoding::BitFlag, self.literal()).with_name(self.name())
    }

    pub fn table(self) -> Result<TransitionTable> {
        TransitionTable::from_literal(TurnEncoding::BitFlag, self.literal())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    /// Accepts the slug or the display name, ignoring case, spaces,
    /// underscores and apostrophes.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalize = |v: &str| -> String {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = normalize(s);
        Pattern::ALL
            .into_iter()
            .find(|p| normalize(p.slug()) == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Pattern::ALL.iter().map(|p| p.slug()).collect();
                format!("unknown pattern '{s}' (known: {})", known.join(", "))
            })
    }
}
