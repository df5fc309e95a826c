//! Arithmetic expression evaluator.
//!
//! Input is first reduced to digits and `+ - * / ( ) .`, then tokenized and
//! parsed by a recursive-descent parser over
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Anything that does not match the grammar in full is rejected.

use crate::services::number_format::round_to;
use crate::types::errors::CalcError;

/// Maximum nesting of parentheses and unary signs.
const MAX_DEPTH: usize = 256;

/// Decimal places shown for non-integral results.
const RESULT_DECIMALS: i32 = 8;

/// Text shown on the display when evaluation fails.
pub const ERROR_SENTINEL: &str = "Error";

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

/// Strips every character that is not a digit or one of `+ - * / ( ) .`.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || "+-*/().".contains(*c))
        .collect()
}

/// Evaluates `input` as an arithmetic expression.
///
/// # Errors
/// Returns a [`CalcError`] for empty or malformed input and for results that
/// are not finite.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let sanitized = sanitize(input);
    if sanitized.is_empty() {
        return Err(CalcError::Empty);
    }

    let tokens = tokenize(&sanitized)?;
    let mut parser = Parser::new(tokens);
    let value = parser.parse()?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

/// Evaluates and formats in one step.
pub fn evaluate_formatted(input: &str) -> Result<String, CalcError> {
    evaluate(input).map(format_result)
}

/// Renders a result for display.
///
/// Integral values have no decimal point; others are rounded to 8 decimals,
/// ties away from zero, with trailing zeros removed.
pub fn format_result(value: f64) -> String {
    // folds -0.0 into 0.0
    let value = if value == 0.0 { 0.0 } else { value };

    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    let rounded = format!("{:.8}", round_to(value, RESULT_DECIMALS));
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '*' => tokens.push(Token::Star),
            '/' => tokens.push(Token::Slash),
            '0'..='9' | '.' => {
                let mut number = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        number.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = number
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(number.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(CalcError::UnexpectedToken(other.to_string())),
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser that computes the value as it goes.
///
/// Operator chains are folded into an accumulator, so only parentheses and
/// unary signs recurse, and those are bounded by [`MAX_DEPTH`].
struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses the whole token stream; trailing tokens are an error.
    fn parse(&mut self) -> Result<f64, CalcError> {
        let value = self.parse_expression()?;
        match self.peek() {
            None => Ok(value),
            Some(token) => Err(CalcError::UnexpectedToken(describe(token))),
        }
    }

    fn parse_expression(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.parse_term()?;

        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    acc += self.parse_term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    acc -= self.parse_term()?;
                }
                _ => break,
            }
        }

        Ok(acc)
    }

    fn parse_term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.parse_unary()?;

        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    acc *= self.parse_unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    acc /= self.parse_unary()?;
                }
                _ => break,
            }
        }

        Ok(acc)
    }

    fn parse_unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                let operand = self.nested(Self::parse_unary)?;
                Ok(-operand)
            }
            Some(Token::Plus) => {
                self.advance();
                self.nested(Self::parse_unary)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<f64, CalcError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LeftParen) => {
                let value = self.nested(Self::parse_expression)?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(value),
                    Some(token) => Err(CalcError::UnexpectedToken(describe(&token))),
                    None => Err(CalcError::UnclosedParen),
                }
            }
            Some(token) => Err(CalcError::UnexpectedToken(describe(&token))),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<f64, CalcError>,
    ) -> Result<f64, CalcError> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();
        if token.is_some() {
            self.current += 1;
        }
        token
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => n.to_string(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::Slash => "/".to_string(),
        Token::LeftParen => "(".to_string(),
        Token::RightParen => ")".to_string(),
    }
}
