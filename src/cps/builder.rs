use super::{Expr, UNBOUNDED};
use crate::parser::{
    ast::{AstKind, Bound, ClassKind, GreedyKind, MatchKind},
    Ast,
};

pub(crate) struct Builder;

impl Builder {
    pub fn build(ast: &Ast) -> Result<Expr, String> {
        Self::build_node(ast)
    }

    fn build_node(ast: &Ast) -> Result<Expr, String> {
        match &ast.kind {
            AstKind::Empty => Err("empty pattern".to_owned()),
            AstKind::Sequence => Self::build_sequence(ast),
            AstKind::Alternation => Self::build_alternation(ast),
            AstKind::Star(greedy) => Self::build_star(ast, greedy),
            AstKind::Plus(greedy) => Self::build_plus(ast, greedy),
            AstKind::Option(greedy) => Self::build_option(ast, greedy),
            AstKind::Bounded(min, max, greedy) => Self::build_bounded(ast, *min, *max, greedy),
            AstKind::Match(kind) => Self::build_match(kind),
            AstKind::Class(kind) => Self::build_class(kind),
        }
    }

    fn build_sequence(ast: &Ast) -> Result<Expr, String> {
        let mut exprs = Vec::new();
        for child in ast.children.iter() {
            exprs.push(Self::build_node(child)?);
        }

        let mut expr = exprs.pop().ok_or("empty sequence".to_owned())?;
        while let Some(head) = exprs.pop() {
            expr = Expr::Concat(Box::new(head), Box::new(expr));
        }
        Ok(expr)
    }

    fn build_alternation(ast: &Ast) -> Result<Expr, String> {
        let mut exprs = Vec::new();
        for child in ast.children.iter() {
            exprs.push(Self::build_node(child)?);
        }

        let mut expr = exprs.pop().ok_or("empty alternation".to_owned())?;
        while let Some(head) = exprs.pop() {
            expr = Expr::Alternative(Box::new(head), Box::new(expr));
        }
        Ok(expr)
    }

    fn build_star(ast: &Ast, greedy: &GreedyKind) -> Result<Expr, String> {
        let inner = Self::build_node(&ast.children[0])?;

        match greedy {
            GreedyKind::Greedy => Ok(Expr::Repeat(Box::new(inner))),
            GreedyKind::NonGreedy => Ok(Expr::Quantity {
                inner: Box::new(inner),
                min: 0,
                max: UNBOUNDED,
                greedy: false,
            }),
        }
    }

    fn build_plus(ast: &Ast, greedy: &GreedyKind) -> Result<Expr, String> {
        let inner = Self::build_node(&ast.children[0])?;

        Ok(Expr::Quantity {
            inner: Box::new(inner),
            min: 1,
            max: UNBOUNDED,
            greedy: *greedy == GreedyKind::Greedy,
        })
    }

    fn build_option(ast: &Ast, greedy: &GreedyKind) -> Result<Expr, String> {
        let inner = Self::build_node(&ast.children[0])?;

        match greedy {
            GreedyKind::Greedy => Ok(Expr::Optional(Box::new(inner))),
            GreedyKind::NonGreedy => Ok(Expr::Quantity {
                inner: Box::new(inner),
                min: 0,
                max: 1,
                greedy: false,
            }),
        }
    }

    fn build_bounded(
        ast: &Ast,
        min: Bound,
        max: Bound,
        greedy: &GreedyKind,
    ) -> Result<Expr, String> {
        let inner = Self::build_node(&ast.children[0])?;

        let min = match min {
            Bound::Num(n) => n,
            Bound::Infinity => return Err("lower bound must be finite".to_owned()),
        };
        let max = match max {
            Bound::Num(n) => n,
            Bound::Infinity => UNBOUNDED,
        };
        if min > max {
            return Err(format!("out of bound order {{{},{}}}", min, max));
        }

        Ok(Expr::Quantity {
            inner: Box::new(inner),
            min,
            max,
            greedy: *greedy == GreedyKind::Greedy,
        })
    }

    fn build_match(kind: &MatchKind) -> Result<Expr, String> {
        match kind {
            MatchKind::Any => Ok(Expr::AnySingle),
            MatchKind::Char(c) => Ok(Expr::Literal(*c)),
        }
    }

    fn build_class(kind: &ClassKind) -> Result<Expr, String> {
        match kind {
            ClassKind::Word => Ok(Expr::WordClass),
            ClassKind::Digit => Ok(Expr::DigitClass),
            ClassKind::Space => Ok(Expr::SpaceClass),
        }
    }
}
