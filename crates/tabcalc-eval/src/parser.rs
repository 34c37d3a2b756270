//! Recursive descent parser and AST evaluation

use crate::error::EvalError;
use crate::token::{Token, TokenKind, Tokenizer};
use crate::Result;

/// Deepest nesting of parentheses and unary signs the parser accepts
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        let value = match self {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn eval(&self) -> Result<f64> {
        // Operator chains nest to the left; walk that spine with a loop
        let mut chain = Vec::new();
        let mut node = self;
        let first = loop {
            match node {
                Expr::Binary { left, op, right } => {
                    chain.push((*op, right));
                    node = &**left;
                }
                Expr::Number(n) if n.is_finite() => break *n,
                Expr::Number(_) => return Err(EvalError::NonFinite),
                Expr::Negate(inner) => break -inner.eval()?,
            }
        };

        chain
            .into_iter()
            .rev()
            .try_fold(first, |value, (op, right)| op.apply(value, right.eval()?))
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Unlink the left spine so a long chain is freed without recursing
        let mut next = self.take_left();
        while let Some(mut node) = next {
            next = node.take_left();
        }
    }
}

impl Expr {
    fn take_left(&mut self) -> Option<Expr> {
        match self {
            Expr::Binary { left, .. } => Some(std::mem::replace(&mut **left, Expr::Number(0.0))),
            _ => None,
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Tokenize and parse a whole expression
    pub fn parse_str(input: &str) -> Result<Expr> {
        let tokens = Tokenizer::new(input).tokenize()?;
        if tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let mut parser = Self::new(tokens);
        let expr = parser.parse_expression()?;

        // Everything must be consumed
        if let Some(token) = parser.peek() {
            return Err(unexpected(token));
        }

        Ok(expr)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self, token: Token) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep { pos: token.pos });
        }
        Ok(())
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Subtract),
            _ => None,
        }) {
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            _ => None,
        }) {
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let Some(token) = self.peek() else {
            return Err(EvalError::UnexpectedEnd);
        };

        let negate = match token.kind {
            TokenKind::Minus => true,
            TokenKind::Plus => false,
            _ => return self.parse_primary(),
        };

        self.pos += 1;
        self.descend(token)?;
        let operand = self.parse_unary()?;
        self.depth -= 1;

        if negate {
            Ok(Expr::Negate(Box::new(operand)))
        } else {
            Ok(operand)
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.next().ok_or(EvalError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::LeftParen => {
                self.descend(token)?;
                let inner = self.parse_expression()?;
                self.depth -= 1;

                match self.next() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(EvalError::UnbalancedParen { pos: token.pos }),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: Token) -> EvalError {
    EvalError::UnexpectedToken {
        found: token.kind.to_string(),
        pos: token.pos,
    }
}
