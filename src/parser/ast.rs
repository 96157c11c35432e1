#[derive(Debug, PartialEq)]
pub struct Ast {
    pub kind: AstKind,
    pub children: Vec<Ast>,
}

#[derive(Debug, PartialEq)]
pub enum AstKind {
    Empty,
    Sequence,
    Alternation,
    Star(GreedyKind),
    Plus(GreedyKind),
    Option(GreedyKind),
    Bounded(Bound, Bound, GreedyKind),
    Match(MatchKind),
    Class(ClassKind),
}

#[derive(Debug, PartialEq)]
pub enum GreedyKind {
    Greedy,
    NonGreedy,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Bound {
    Num(u32),
    Infinity,
}

#[derive(Debug, PartialEq)]
pub enum MatchKind {
    Any,        // '.'
    Char(char), // a
}

#[derive(Debug, PartialEq)]
pub enum ClassKind {
    Word,  // '\w'
    Digit, // '\d'
    Space, // '\s'
}
