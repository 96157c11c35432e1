// reference
// https://stackoverflow.com/questions/265457/regex-bnf-grammar
// https://www2.cs.sfu.ca/~cameron/Teaching/384/99-3/regexp-plg.html

// syntax (like BNF)
//
// root        = alternation
// alternation = sequence ( '|' sequence ) +
// sequence    = quantified +
// quantified  = atom ( ( '*' | '+' | '?' | '{' bounds '}' ) '?' ? ) ?
// bounds      = number ( ',' number ? ) ?
// atom        = '(' group ')' | '.' | class | char
// group       = root
// class       = '\w' | '\d' | '\s'
// char        = literal | '\' metachar

pub mod ast;
mod parser;

pub use ast::Ast;
pub use parser::Parser;
