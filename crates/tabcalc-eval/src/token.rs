//! Tokenizer

use crate::error::EvalError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}

/// A token and the char offset where it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

pub struct Tokenizer<'a> {
    chars: std::iter::Peekable<std::iter::Enumerate<std::str::Chars<'a>>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().enumerate().peekable(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}

        let Some(&(pos, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        let kind = match ch {
            '0'..='9' | '.' => return self.read_number().map(Some),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => return Err(EvalError::UnexpectedChar { ch, pos }),
        };
        self.chars.next();

        Ok(Some(Token { kind, pos }))
    }

    fn read_number(&mut self) -> Result<Token> {
        let pos = self.chars.peek().map(|(i, _)| *i).unwrap_or_default();
        let mut text = String::new();

        while let Some((_, ch)) = self
            .chars
            .next_if(|(_, ch)| ch.is_ascii_digit() || *ch == '.')
        {
            text.push(ch);
        }

        // `str::parse` accepts forms like "inf" and "1e5"; only digits and one dot get here
        let dots = text.matches('.').count();
        let value = if dots <= 1 {
            text.parse::<f64>().ok()
        } else {
            None
        };

        match value {
            Some(value) => Ok(Token {
                kind: TokenKind::Number(value),
                pos,
            }),
            None => Err(EvalError::InvalidNumber { text, pos }),
        }
    }
}
