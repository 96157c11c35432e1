use super::{Expr, UNBOUNDED};

// "what must still hold, starting at this position, for the whole match to
// succeed"; nodes only ever invoke it, never inspect it
type Cont<'c> = &'c dyn Fn(&str, usize) -> bool;

pub fn is_full_match(expr: &Expr, subject: &str) -> bool {
    let len = subject.chars().count();
    expr.match_at(subject, 0, &|_, pos| pos == len)
}

impl Expr {
    fn match_at(&self, subject: &str, pos: usize, cont: Cont) -> bool {
        match self {
            Expr::Literal(ch) => match_single(subject, pos, |c| c == *ch, cont),
            Expr::AnySingle => match_single(subject, pos, |_| true, cont),
            Expr::WordClass => match_single(subject, pos, is_word, cont),
            Expr::DigitClass => match_single(subject, pos, is_digit, cont),
            Expr::SpaceClass => match_single(subject, pos, is_space, cont),
            Expr::Concat(left, right) => {
                left.match_at(subject, pos, &|rest, next| right.match_at(rest, next, cont))
            }
            Expr::Alternative(left, right) => {
                left.match_at(subject, pos, cont) || right.match_at(subject, pos, cont)
            }
            Expr::Optional(inner) => inner.match_at(subject, pos, cont) || cont(subject, pos),
            Expr::Repeat(inner) => match_star(inner, subject, pos, cont),
            Expr::Quantity {
                inner,
                min,
                max,
                greedy,
            } => match_bounded(inner, subject, pos, *min, *max, *greedy, cont),
        }
    }
}

fn match_single(subject: &str, pos: usize, pred: impl Fn(char) -> bool, cont: Cont) -> bool {
    subject
        .chars()
        .nth(pos)
        .filter(|c| pred(*c))
        .map_or(false, |_| cont(subject, pos + 1))
}

fn match_star(inner: &Expr, subject: &str, pos: usize, cont: Cont) -> bool {
    inner.match_at(subject, pos, &|rest, next| {
        match_star(inner, rest, next, cont) || cont(rest, next)
    }) || cont(subject, pos)
}

// the remaining (min, max) pair travels with the call, the shared tree is
// never written to, so a failed branch needs no undo step
fn match_bounded(
    inner: &Expr,
    subject: &str,
    pos: usize,
    min: u32,
    max: u32,
    greedy: bool,
    cont: Cont,
) -> bool {
    if min > 0 {
        inner.match_at(subject, pos, &|rest, next| {
            match_bounded(inner, rest, next, min - 1, dec_bounded(max), greedy, cont)
        })
    } else if max == 0 {
        cont(subject, pos)
    } else if greedy {
        inner.match_at(subject, pos, &|rest, next| {
            match_bounded(inner, rest, next, 0, dec_bounded(max), greedy, cont)
        }) || cont(subject, pos)
    } else {
        cont(subject, pos)
            || inner.match_at(subject, pos, &|rest, next| {
                match_bounded(inner, rest, next, 0, dec_bounded(max), greedy, cont)
            })
    }
}

fn dec_bounded(max: u32) -> u32 {
    if max == UNBOUNDED {
        max
    } else {
        max - 1
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{200b}' | '\u{200c}')
}
