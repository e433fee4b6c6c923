use polysolve_lexer::{tokenize, Token};

#[test]
fn coefficients_and_variables() {
    let src = "5 * X^0 + 4 * X^1";
    assert_eq!(
        tokenize(src),
        vec![
            Token::Integer,
            Token::Star,
            Token::Ident,
            Token::Caret,
            Token::Integer,
            Token::Plus,
            Token::Integer,
            Token::Star,
            Token::Ident,
            Token::Caret,
            Token::Integer,
        ]
    );
}

#[test]
fn integers_and_floats_are_distinct() {
    let src = "4 4.0 5.6";
    assert_eq!(
        tokenize(src),
        vec![Token::Integer, Token::Float, Token::Float]
    );
}

#[test]
fn scientific_notation() {
    let src = "3e2 1.5e-3";
    assert_eq!(tokenize(src), vec![Token::Integer, Token::Float]);
}

#[test]
fn full_equation() {
    let src = "1 * X^2 - 4 * X^0 = 0";
    assert_eq!(
        tokenize(src),
        vec![
            Token::Integer,
            Token::Star,
            Token::Ident,
            Token::Caret,
            Token::Integer,
            Token::Minus,
            Token::Integer,
            Token::Star,
            Token::Ident,
            Token::Caret,
            Token::Integer,
            Token::Assign,
            Token::Integer,
        ]
    );
}

#[test]
fn unmatched_character_becomes_error() {
    assert!(tokenize("5 ? 3").contains(&Token::Error));
}
