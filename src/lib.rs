mod cps;
mod parser;

pub use cps::{is_full_match, Expr, Regex, UNBOUNDED};
