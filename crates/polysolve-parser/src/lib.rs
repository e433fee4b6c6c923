use polysolve_lexer::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single monomial of the reduced equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u32,
}

/// A reduced equation `P(X) = 0`: terms sorted ascending by exponent, at
/// most one per exponent, none with a zero coefficient when produced by
/// [`parse`]. `degree` is the highest exponent carrying a non-zero
/// coefficient, 0 when no term remains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub terms: Vec<Term>,
    pub degree: u32,
}

impl Equation {
    /// Fold both sides into canonical form: right-hand coefficients are
    /// negated, like exponents summed, zero results dropped.
    pub fn reduce(left: Vec<Term>, right: Vec<Term>) -> Self {
        let mut combined: BTreeMap<u32, f64> = BTreeMap::new();
        for term in left {
            *combined.entry(term.exponent).or_insert(0.0) += term.coefficient;
        }
        for term in right {
            *combined.entry(term.exponent).or_insert(0.0) -= term.coefficient;
        }
        let terms: Vec<Term> = combined
            .into_iter()
            .filter(|(_, coefficient)| *coefficient != 0.0)
            .map(|(exponent, coefficient)| Term {
                coefficient,
                exponent,
            })
            .collect();
        Self::from_terms(terms)
    }

    /// Build an equation from explicit terms, sorting ascending by exponent
    /// and recomputing the degree over the non-zero coefficients.
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        terms.sort_by_key(|t| t.exponent);
        let degree = terms
            .iter()
            .filter(|t| t.coefficient != 0.0)
            .map(|t| t.exponent)
            .max()
            .unwrap_or(0);
        Equation { terms, degree }
    }

    /// Coefficient attached to `exponent`, 0 when the term is absent.
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.terms
            .iter()
            .find(|t| t.exponent == exponent)
            .map(|t| t.coefficient)
            .unwrap_or(0.0)
    }

    /// A fresh equation with every term at `exponent` removed and the
    /// degree recomputed from what is left.
    pub fn without_exponent(&self, exponent: u32) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .copied()
                .filter(|t| t.exponent != exponent)
                .collect(),
        )
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 = 0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                if term.coefficient < 0.0 {
                    write!(f, "-")?;
                }
            } else if term.coefficient < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write!(
                f,
                "{} * X^{}",
                format_number(term.coefficient.abs()),
                term.exponent
            )?;
        }
        write!(f, " = 0")
    }
}

/// Fixed 6-decimal rendering with the trailing zeros of the fractional part
/// trimmed, dropping the decimal point when the fraction empties. Only the
/// fractional side is touched, so `100.0` renders as `100`, never `1`.
pub fn format_number(value: f64) -> String {
    // `{:.6}` keeps the sign on a negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    let fixed = format!("{value:.6}");
    match fixed.split_once('.') {
        Some((integral, fractional)) => {
            let fractional = fractional.trim_end_matches('0');
            if fractional.is_empty() {
                integral.to_string()
            } else {
                format!("{integral}.{fractional}")
            }
        }
        None => fixed,
    }
}

#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
    pub found_token: Option<String>,
    pub expected: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at position {}: {}",
            self.position, self.message
        )?;
        if let Some(found) = &self.found_token {
            write!(f, " (found: '{found}')")?;
        }
        if let Some(expected) = &self.expected {
            write!(f, " (expected: {expected})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone)]
struct TokenInfo {
    token: Token,
    lexeme: String,
    position: usize,
}

/// Parse an equation string into its canonical reduced form.
pub fn parse(input: &str) -> Result<Equation, ParseError> {
    let toks = polysolve_lexer::tokenize_detailed(input);
    let mut tokens = Vec::new();

    for t in toks {
        if matches!(t.token, Token::Error) {
            return Err(ParseError {
                message: format!("Invalid token: '{}'", t.lexeme),
                position: t.start,
                found_token: Some(t.lexeme),
                expected: None,
            });
        }
        tokens.push(TokenInfo {
            token: t.token,
            lexeme: t.lexeme,
            position: t.start,
        });
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        input: input.to_string(),
    };
    parser.parse_equation()
}

struct Parser {
    tokens: Vec<TokenInfo>,
    pos: usize,
    input: String,
}

impl Parser {
    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn next(&mut self) -> Option<TokenInfo> {
        let info = self.tokens.get(self.pos).cloned();
        if info.is_some() {
            self.pos += 1;
        }
        info
    }

    fn consume(&mut self, expected: &Token) -> bool {
        if self.peek_token() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: &str) -> ParseError {
        let (position, found_token) = if let Some(token_info) = self.tokens.get(self.pos) {
            (token_info.position, Some(token_info.lexeme.clone()))
        } else {
            (self.input.len(), None)
        };

        ParseError {
            message: message.to_string(),
            position,
            found_token,
            expected: None,
        }
    }

    fn error_with_expected(&self, message: &str, expected: &str) -> ParseError {
        let (position, found_token) = if let Some(token_info) = self.tokens.get(self.pos) {
            (token_info.position, Some(token_info.lexeme.clone()))
        } else {
            (self.input.len(), None)
        };

        ParseError {
            message: message.to_string(),
            position,
            found_token,
            expected: Some(expected.to_string()),
        }
    }

    fn parse_equation(&mut self) -> Result<Equation, ParseError> {
        let left = self.parse_side()?;
        if !self.consume(&Token::Assign) {
            return Err(self.error_with_expected("equation must contain '='", "'='"));
        }
        let right = self.parse_side()?;
        // parse_side only stops at '=' or end of input
        if self.peek_token() == Some(&Token::Assign) {
            return Err(self.error("equation contains more than one '='"));
        }
        Ok(Equation::reduce(left, right))
    }

    fn parse_side(&mut self) -> Result<Vec<Term>, ParseError> {
        let mut terms = Vec::new();
        // Leading sign of the first term is optional and defaults to '+'
        let mut sign = match self.peek_token() {
            Some(Token::Minus) => {
                self.pos += 1;
                -1.0
            }
            Some(Token::Plus) => {
                self.pos += 1;
                1.0
            }
            _ => 1.0,
        };
        loop {
            terms.push(self.parse_term(sign)?);
            match self.peek_token() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    sign = 1.0;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    sign = -1.0;
                }
                Some(Token::Assign) | None => break,
                _ => {
                    return Err(self.error_with_expected(
                        "expected an operator between terms",
                        "'+', '-' or '='",
                    ));
                }
            }
        }
        Ok(terms)
    }

    fn parse_term(&mut self, sign: f64) -> Result<Term, ParseError> {
        match self.peek_token() {
            Some(Token::Integer | Token::Float) => {
                let info = self
                    .next()
                    .ok_or_else(|| self.error("expected a coefficient"))?;
                let coefficient: f64 = info.lexeme.parse().map_err(|_| ParseError {
                    message: format!("invalid coefficient '{}'", info.lexeme),
                    position: info.position,
                    found_token: Some(info.lexeme.clone()),
                    expected: Some("a real number".to_string()),
                })?;
                let exponent = if self.consume(&Token::Star) {
                    self.expect_variable()?;
                    self.parse_exponent()?
                } else {
                    0
                };
                Ok(Term {
                    coefficient: sign * coefficient,
                    exponent,
                })
            }
            Some(Token::Ident) => {
                self.expect_variable()?;
                let exponent = self.parse_exponent()?;
                Ok(Term {
                    coefficient: sign,
                    exponent,
                })
            }
            _ => Err(self.error_with_expected("expected a term", "a coefficient or 'X'")),
        }
    }

    fn expect_variable(&mut self) -> Result<(), ParseError> {
        match self.peek_token() {
            Some(Token::Ident) => {
                let info = self
                    .next()
                    .ok_or_else(|| self.error("expected the variable"))?;
                if info.lexeme.eq_ignore_ascii_case("x") {
                    Ok(())
                } else {
                    Err(ParseError {
                        message: format!("unknown variable '{}'", info.lexeme),
                        position: info.position,
                        found_token: Some(info.lexeme),
                        expected: Some("'X'".to_string()),
                    })
                }
            }
            _ => Err(self.error_with_expected("expected the variable after '*'", "'X'")),
        }
    }

    fn parse_exponent(&mut self) -> Result<u32, ParseError> {
        if !self.consume(&Token::Caret) {
            // Implicit exponent of a bare variable
            return Ok(1);
        }
        match self.peek_token() {
            Some(Token::Integer) => {
                let info = self
                    .next()
                    .ok_or_else(|| self.error("expected an exponent"))?;
                info.lexeme.parse().map_err(|_| ParseError {
                    message: format!("invalid exponent '{}'", info.lexeme),
                    position: info.position,
                    found_token: Some(info.lexeme),
                    expected: Some("a non-negative integer".to_string()),
                })
            }
            Some(Token::Float) => Err(self.error_with_expected(
                "exponent must be an integer",
                "a non-negative integer",
            )),
            Some(Token::Minus) => Err(self.error_with_expected(
                "exponent must not be negative",
                "a non-negative integer",
            )),
            _ => Err(self.error_with_expected(
                "expected an exponent after '^'",
                "a non-negative integer",
            )),
        }
    }
}
