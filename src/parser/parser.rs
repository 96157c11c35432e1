use std::iter::Peekable;
use std::vec::IntoIter;

use super::ast::*;

const META_CHARS: [char; 10] = [
    '|', // alternation
    '*', // star
    '+', // plus
    '?', // option or non-greedy marker
    ',', // bound separator
    '.', // any single
    '{', '}', // bound brackets
    '(', ')', // group brackets
];

pub struct Parser {
    stream: Peekable<IntoIter<char>>,
}

impl Parser {
    pub fn parse(pattern: &str) -> Result<Ast, String> {
        let mut parser = Parser {
            stream: pattern
                .chars()
                .collect::<Vec<char>>()
                .into_iter()
                .peekable(),
        };

        let ast = parser.parse_alternation()?;
        match parser.stream.next() {
            Some(c) => Err(format!("unexpected character: {}", c)),
            None => Ok(ast),
        }
    }

    fn parse_alternation(&mut self) -> Result<Ast, String> {
        let ast = self.parse_sequence()?;
        if ast.kind == AstKind::Empty {
            return Ok(ast);
        }

        if self.stream.peek() != Some(&'|') {
            return Ok(ast);
        }

        let mut children = vec![ast];
        while self.stream.next_if_eq(&'|').is_some() {
            let rhs = self.parse_sequence()?;
            if rhs.kind == AstKind::Empty {
                return Err("missing right side of the alternation".to_owned());
            }
            children.push(rhs);
        }

        Ok(Ast {
            kind: AstKind::Alternation,
            children,
        })
    }

    fn parse_sequence(&mut self) -> Result<Ast, String> {
        let mut children = Vec::new();
        loop {
            let ast = self.parse_quantified()?;
            if ast.kind == AstKind::Empty {
                break;
            }
            children.push(ast);
        }

        match children.len() {
            0 => Ok(Ast {
                kind: AstKind::Empty,
                children: vec![],
            }),
            1 => Ok(children.pop().unwrap()),
            _ => Ok(Ast {
                kind: AstKind::Sequence,
                children,
            }),
        }
    }

    fn parse_quantified(&mut self) -> Result<Ast, String> {
        let ast = self.parse_atom()?;
        if ast.kind == AstKind::Empty {
            return Ok(ast);
        }

        let kind = match self.stream.peek() {
            Some('*') => {
                self.stream.next();
                AstKind::Star(self.parse_greediness())
            }
            Some('+') => {
                self.stream.next();
                AstKind::Plus(self.parse_greediness())
            }
            Some('?') => {
                self.stream.next();
                AstKind::Option(self.parse_greediness())
            }
            Some('{') => {
                let (min, max) = self.parse_bounds()?;
                AstKind::Bounded(min, max, self.parse_greediness())
            }
            _ => {
                return Ok(ast);
            }
        };

        Ok(Ast {
            kind,
            children: vec![ast],
        })
    }

    fn parse_greediness(&mut self) -> GreedyKind {
        match self.stream.next_if_eq(&'?') {
            Some(_) => GreedyKind::NonGreedy,
            None => GreedyKind::Greedy,
        }
    }

    fn parse_bounds(&mut self) -> Result<(Bound, Bound), String> {
        self.stream.next(); // consume '{'

        let min = self
            .parse_number()
            .ok_or("bound count is empty".to_owned())?;

        if self.stream.next_if_eq(&'}').is_some() {
            return Ok((Bound::Num(min), Bound::Num(min)));
        }

        if self.stream.next_if_eq(&',').is_none() {
            return match self.stream.next() {
                Some(c) => Err(format!("bound operator wants ',', got '{}'", c)),
                None => Err("bound operator wants ',', got EoL".to_owned()),
            };
        }

        let max = match self.parse_number() {
            Some(n) if n < min => {
                return Err(format!("out of bound order {{{},{}}}", min, n));
            }
            Some(n) => Bound::Num(n),
            None => Bound::Infinity,
        };

        match self.stream.next() {
            Some('}') => Ok((Bound::Num(min), max)),
            Some(c) => Err(format!("unmatched opening curly bracket, got '{}'", c)),
            None => Err("unmatched opening curly bracket, got EoL".to_owned()),
        }
    }

    fn parse_atom(&mut self) -> Result<Ast, String> {
        match self.stream.peek() {
            Some('(') => self.parse_group(),
            Some('.') => self.parse_any(),
            Some('\\') => self.parse_escape(),
            Some(c) if !META_CHARS.contains(c) => {
                let c = self.stream.next().unwrap();
                Ok(Ast {
                    kind: AstKind::Match(MatchKind::Char(c)),
                    children: vec![],
                })
            }
            _ => Ok(Ast {
                kind: AstKind::Empty,
                children: vec![],
            }),
        }
    }

    fn parse_group(&mut self) -> Result<Ast, String> {
        self.stream.next(); // consume '('

        let ast = self.parse_alternation()?;
        if ast.kind == AstKind::Empty {
            return Ok(ast);
        }

        match self.stream.next() {
            Some(')') => Ok(ast),
            Some(c) => Err(format!("unmatched opening parenthesis, got '{}'", c)),
            None => Err("unmatched opening parenthesis, got EoL".to_owned()),
        }
    }

    fn parse_any(&mut self) -> Result<Ast, String> {
        self.stream.next(); // consume '.'

        Ok(Ast {
            kind: AstKind::Match(MatchKind::Any),
            children: vec![],
        })
    }

    fn parse_escape(&mut self) -> Result<Ast, String> {
        self.stream.next(); // consume '\\'

        let kind = match self.stream.next() {
            Some('w') => AstKind::Class(ClassKind::Word),
            Some('d') => AstKind::Class(ClassKind::Digit),
            Some('s') => AstKind::Class(ClassKind::Space),
            Some(c) if META_CHARS.contains(&c) || c == '\\' => {
                AstKind::Match(MatchKind::Char(c))
            }
            Some(c) => {
                return Err(format!("unsupported escape sequence: \\{}", c));
            }
            None => {
                return Err("escape sequence is empty".to_owned());
            }
        };

        Ok(Ast {
            kind,
            children: vec![],
        })
    }

    fn parse_number(&mut self) -> Option<u32> {
        let mut num = String::new();
        while let Some(c) = self.stream.next_if(|c| c.is_ascii_digit()) {
            num.push(c);
        }
        num.parse().ok()
    }
}
