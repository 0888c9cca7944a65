use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Piece<'i> {
    #[regex(r"\{\{[^{}\s]+\}\}", token_name)]
    Token(&'i str),

    #[regex(r"[^{]+")]
    Text(&'i str),

    #[token("{")]
    Brace,
}

fn token_name<'i>(lex: &mut Lexer<'i, Piece<'i>>) -> &'i str {
    let slice = lex.slice();
    &slice[2..slice.len() - 2]
}

/// A `{{NAME}}` occurrence inside template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'i> {
    pub name: &'i str,
    /// 1-based line of the occurrence.
    pub line: usize,
}

impl Placeholder<'_> {
    /// The token as written in the template, braces included.
    #[must_use]
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.name)
    }
}

impl std::fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.token(), self.line)
    }
}

/// Lists every placeholder in `text`, in order of appearance.
#[must_use]
pub fn scan(text: &str) -> Vec<Placeholder<'_>> {
    let mut line = 1;
    let mut found = Vec::new();
    let mut lexer = Piece::lexer(text);

    while let Some(piece) = lexer.next() {
        match piece {
            Ok(Piece::Token(name)) => found.push(Placeholder { name, line }),
            Ok(Piece::Text(text)) => line += text.matches('\n').count(),
            Ok(Piece::Brace) => {}
            Err(()) => crate::trace!("Skipping unreadable input at {:?}", lexer.span()),
        }
    }

    found
}
