use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[repr(transparent)]
pub struct Delimiter(char);

impl Delimiter {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<char> for Delimiter {
    fn from(value: char) -> Self {
        Self(value)
    }
}

#[derive(Error, Debug)]
#[error("delimiter must be a single character, got {delimiter:?}")]
pub struct DelimiterError {
    delimiter: String,
}

impl TryFrom<&str> for Delimiter {
    type Error = DelimiterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(delimiter), None) => Ok(Self(delimiter)),
            _ => Err(DelimiterError {
                delimiter: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(".", '.')]
    #[case("/", '/')]
    #[case("|", '|')]
    fn test_delimiter_from_single_character_str_succeeds(
        #[case] value: &str,
        #[case] expected: char,
    ) {
        let delimiter = assert_ok!(Delimiter::try_from(value));
        assert_eq!(expected, delimiter.as_char());
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("ab")]
    fn test_delimiter_from_longer_str_fails(#[case] value: &str) {
        let error = assert_err!(Delimiter::try_from(value));
        assert_eq!(value, error.delimiter);
    }

    #[rstest]
    fn test_delimiter_displays_as_bare_character() {
        assert_eq!(".", Delimiter::from('.').to_string());
    }
}
