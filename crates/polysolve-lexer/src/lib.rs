use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Float before Integer so "4.5" is never split at the dot
    #[regex(r"\d+\.\d+([eE][+-]?\d+)?")]
    Float,
    #[regex(r"\d+([eE][+-]?\d+)?")]
    Integer,

    // The polynomial variable; the parser validates the spelling
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("^")]
    Caret,
    #[token("=")]
    Assign,

    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub lexeme: String,
    pub start: usize,
    pub end: usize,
}

pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_detailed(input)
        .into_iter()
        .map(|t| t.token)
        .collect()
}

pub fn tokenize_detailed(input: &str) -> Vec<SpannedToken> {
    let mut lex = Token::lexer(input);
    let mut out: Vec<SpannedToken> = Vec::new();
    while let Some(res) = lex.next() {
        // No recovery: an unmatched character becomes Token::Error and the
        // parser rejects it before looking at any term.
        let token = match res {
            Ok(tok) => tok,
            Err(_) => Token::Error,
        };
        let span = lex.span();
        out.push(SpannedToken {
            token,
            lexeme: lex.slice().to_string(),
            start: span.start,
            end: span.end,
        });
    }
    out
}
