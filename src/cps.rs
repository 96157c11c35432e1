// Backtracking by continuation passing: every node consumes a prefix of the
// subject and asks `cont` whether the rest of the match obligation holds from
// the position it reached. Failed branches unwind through ordinary boolean
// short-circuiting, so no per-node state has to be restored.

use self::builder::Builder;
use crate::parser::Parser;

mod builder;
mod matcher;

#[cfg(test)]
mod tests;

pub use matcher::is_full_match;

// sentinel for an unbounded upper bound in Quantity
pub const UNBOUNDED: u32 = u32::MAX;

#[derive(Debug, PartialEq)]
pub enum Expr {
    Literal(char), // a
    AnySingle,     // '.'
    WordClass,     // '\w'
    DigitClass,    // '\d'
    SpaceClass,    // '\s'
    Concat(Box<Expr>, Box<Expr>),      // ab
    Alternative(Box<Expr>, Box<Expr>), // a|b
    Optional(Box<Expr>),               // a?
    Repeat(Box<Expr>),                 // a*
    Quantity {
        // a{min,max}
        inner: Box<Expr>,
        min: u32,
        max: u32,
        greedy: bool,
    },
}

pub struct Regex {
    root: Expr,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex, String> {
        let syntax = Parser::parse(pattern)?;
        let root = Builder::build(&syntax)?;

        Ok(Regex { root })
    }

    pub fn from_root(root: Expr) -> Regex {
        Regex { root }
    }

    pub fn is_match(&self, str: &str) -> bool {
        is_full_match(&self.root, str)
    }
}
