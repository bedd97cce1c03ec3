//! Contains the [`Literal`] value carried by string and number tokens.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;

/// Is the decoded payload of a string or number token.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner, From)]
pub enum Literal {
    /// The content of a string literal without the surrounding quotes.
    Text(String),

    /// The value of a number literal.
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => f.write_str(&canonical_number(*number)),
        }
    }
}

/// Renders the number with six fractional digits and then drops the zero fraction, or the
/// trailing zeros of a non-zero fraction together with a dangling decimal point.
fn canonical_number(number: f64) -> String {
    let mut result = format!("{number:.6}");

    if let Some(position) = result.find(".000000") {
        result.truncate(position);
        return result;
    }

    if let Some(decimal_point) = result.find('.') {
        if let Some(last_non_zero) = result.rfind(|character| character != '0') {
            if last_non_zero > decimal_point {
                result.truncate(last_non_zero + 1);
            }
        }

        if result.ends_with('.') {
            result.pop();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::Literal;

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(Literal::from("hi\nthere".to_string()).to_string(), "hi\nthere");
        assert_eq!(Literal::from(String::new()).to_string(), "");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(Literal::Number(4.0).to_string(), "4");
        assert_eq!(Literal::Number(0.0).to_string(), "0");
        assert_eq!(Literal::Number(1200.0).to_string(), "1200");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(Literal::Number(2.75).to_string(), "2.75");
        assert_eq!(Literal::Number(10.5).to_string(), "10.5");
        assert_eq!(Literal::Number(0.000_001).to_string(), "0.000001");
    }

    #[test]
    fn precision_is_capped_at_six_digits() {
        assert_eq!(Literal::Number(1.234_567_8).to_string(), "1.234568");
        assert_eq!(Literal::Number(2.000_000_1).to_string(), "2");
    }

    #[test]
    fn accessors() {
        let number = Literal::from(1.5);
        let text = Literal::from("a".to_string());

        assert_eq!(number.as_number(), Some(&1.5));
        assert!(number.as_text().is_none());
        assert_eq!(text.as_text().map(String::as_str), Some("a"));
    }
}
