//! TabCalc Expression Evaluator
//!
//! Arithmetic only: decimal numerals, `+ - * /`, unary sign and parentheses.
//! Nothing is ever executed beyond this grammar.
//!
//! ```text
//! expression ::= term (('+' | '-') term)*
//! term       ::= unary (('*' | '/') unary)*
//! unary      ::= ('+' | '-') unary | primary
//! primary    ::= NUMBER | '(' expression ')'
//! ```
//!
//! Parentheses and unary signs nest at most [`MAX_DEPTH`] deep.

mod error;
mod format;
mod parser;
mod token;

pub use error::EvalError;
pub use format::format_number;
pub use parser::{BinaryOp, Expr, Parser, MAX_DEPTH};
pub use token::{Token, TokenKind, Tokenizer};

pub type Result<T> = std::result::Result<T, EvalError>;

/// Text shown in place of a result when evaluation fails
pub const ERROR_TOKEN: &str = "Error";

/// Evaluate `text` and return the numeric result.
pub fn evaluate_value(text: &str) -> Result<f64> {
    let expr = Parser::parse_str(text)?;
    expr.eval()
}

/// Evaluate `text` and return the result formatted for display.
pub fn evaluate(text: &str) -> Result<String> {
    match evaluate_value(text) {
        Ok(value) => Ok(format_number(value)),
        Err(e) => {
            tracing::debug!(expression = %text, error = %e, "Evaluation failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), "14");
        assert_eq!(evaluate("10/4").unwrap(), "2.5");
        assert_eq!(evaluate("8-2-1").unwrap(), "5");
        assert_eq!(evaluate("12/2/3").unwrap(), "2");
        assert_eq!(evaluate("1+2*3-4/2").unwrap(), "5");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("0.1+0.2").unwrap(), "0.30000000000000004");
        assert_eq!(evaluate(".5*4").unwrap(), "2");
        assert_eq!(evaluate("5.+1").unwrap(), "6");
        assert_eq!(evaluate("7/2").unwrap(), "3.5");
    }

    #[test]
    fn test_result_chaining() {
        let first = evaluate("3-6").unwrap();
        assert_eq!(first, "-3");

        let chained = format!("{first}+2");
        assert_eq!(evaluate(&chained).unwrap(), "-1");

        let chained = format!("{first}*-2");
        assert_eq!(evaluate(&chained).unwrap(), "6");
    }

    #[test]
    fn test_parentheses_and_whitespace() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), "20");
        assert_eq!(evaluate(" 2 + 3 ").unwrap(), "5");
        assert_eq!(evaluate("-(1+1)").unwrap(), "-2");
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   "), Err(EvalError::Empty));
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/(2-2)"), Err(EvalError::DivisionByZero));
        assert!(matches!(
            evaluate("5+*"),
            Err(EvalError::UnexpectedToken { .. })
        ));
        assert_eq!(evaluate("5+"), Err(EvalError::UnexpectedEnd));
        assert!(matches!(
            evaluate("Error7"),
            Err(EvalError::UnexpectedChar { ch: 'E', .. })
        ));
        assert!(matches!(
            evaluate("1.2.3"),
            Err(EvalError::InvalidNumber { .. })
        ));
        assert!(matches!(
            evaluate("(1+2"),
            Err(EvalError::UnbalancedParen { .. })
        ));
        assert!(matches!(
            evaluate("1+2)"),
            Err(EvalError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_deeply_nested_input_is_an_error() {
        let signs = format!("{}1", "-".repeat(200_000));
        assert!(matches!(evaluate(&signs), Err(EvalError::TooDeep { .. })));

        let parens = format!("{}1", "(".repeat(200_000));
        assert!(matches!(evaluate(&parens), Err(EvalError::TooDeep { .. })));

        let balanced = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(evaluate(&balanced), Err(EvalError::TooDeep { .. })));
    }

    #[test]
    fn test_long_operator_chain() {
        let sum = vec!["1"; 200_000].join("+");
        assert_eq!(evaluate(&sum).unwrap(), "200000");

        let product = format!("3{}", "*1".repeat(200_000));
        assert_eq!(evaluate(&product).unwrap(), "3");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let huge = format!("1{}", "0".repeat(300));
        let text = format!("{huge}*{huge}");
        assert_eq!(evaluate(&text), Err(EvalError::NonFinite));
    }
}
