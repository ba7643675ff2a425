use super::character::char_if;
use crate::error::TextError;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9) and returns its value
pub fn digit<'a>() -> impl Parser<Input = &'a str, Output = u32, Error = TextError> {
    char_if(|c| c.is_ascii_digit(), "ASCII digit").map(|c| u32::from(c) - u32::from('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits() {
        for (value, digit_char) in ('0'..='9').enumerate() {
            let input = digit_char.to_string();
            let (d, rest) = digit().parse(input.as_str()).unwrap();
            assert_eq!(d as usize, value, "Failed for digit: {}", digit_char);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_digit_leaves_rest() {
        assert_eq!(digit().parse("9xyz"), Ok((9, "xyz")));
    }

    #[test]
    fn test_non_digit_fails() {
        let result = digit().parse("abc");

        assert_eq!(result, Err(TextError::unexpected("ASCII digit", 'a')));
    }

    #[test]
    fn test_unicode_digit_is_not_ascii() {
        // U+0665 ARABIC-INDIC DIGIT FIVE
        assert!(digit().parse("\u{665}").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            digit().parse(""),
            Err(TextError::unexpected_end("ASCII digit"))
        );
    }
}
