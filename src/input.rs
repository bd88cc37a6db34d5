use std::io::Read;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty, expected an element count")]
    MissingCount,

    #[error("element count must be a non-negative integer, got {token:?}")]
    InvalidCount { token: String },

    #[error("input truncated: expected {expected} integers but only {found} were supplied")]
    Truncated { expected: usize, found: usize },

    #[error("input ended before the target value")]
    MissingTarget,

    #[error("token {position} is not an integer: {token:?}")]
    Parse { token: String, position: usize },
}

/// One problem instance: the sequence to scan and the sum to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl PairInput {
    /// Parse `n`, then `n` integers, then the target.
    ///
    /// Tokens may be separated by any whitespace. Anything after the target
    /// is ignored.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = text.split_whitespace().enumerate();

        let (_, count) = tokens.next().ok_or(InputError::MissingCount)?;
        let count: usize = count.parse().map_err(|_| InputError::InvalidCount {
            token: count.to_string(),
        })?;

        let mut nums = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            let (index, token) = tokens.next().ok_or(InputError::Truncated {
                expected: count,
                found: nums.len(),
            })?;
            nums.push(parse_integer(index, token)?);
        }

        let (index, token) = tokens.next().ok_or(InputError::MissingTarget)?;
        let target = parse_integer(index, token)?;

        if tokens.next().is_some() {
            log::debug!("ignoring trailing tokens after the target");
        }

        Ok(Self { nums, target })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> anyhow::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text)?)
    }
}

fn parse_integer(index: usize, token: &str) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::Parse {
        token: token.to_string(),
        position: index + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline() {
        let input = PairInput::parse("4\n2 7 11 15\n9\n").unwrap();
        assert_eq!(input.nums, vec![2, 7, 11, 15]);
        assert_eq!(input.target, 9);
    }

    #[test]
    fn test_parse_single_line() {
        let input = PairInput::parse("3 -1 0 1 0").unwrap();
        assert_eq!(input.nums, vec![-1, 0, 1]);
        assert_eq!(input.target, 0);
    }

    #[test]
    fn test_parse_empty_sequence() {
        let input = PairInput::parse("0\n5").unwrap();
        assert!(input.nums.is_empty());
        assert_eq!(input.target, 5);
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let input = PairInput::parse("2 1 5 6 extra 42").unwrap();
        assert_eq!(input.nums, vec![1, 5]);
        assert_eq!(input.target, 6);
    }

    #[test]
    fn test_missing_count() {
        assert_eq!(PairInput::parse("  \n"), Err(InputError::MissingCount));
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            PairInput::parse("-1 3"),
            Err(InputError::InvalidCount {
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            PairInput::parse("4\n1 2"),
            Err(InputError::Truncated {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_missing_target() {
        assert_eq!(PairInput::parse("2\n1 2"), Err(InputError::MissingTarget));
    }

    #[test]
    fn test_parse_error_position() {
        assert_eq!(
            PairInput::parse("3\n1 x 3\n4"),
            Err(InputError::Parse {
                token: "x".to_string(),
                position: 3
            })
        );
        assert_eq!(
            PairInput::parse("1 1 nine"),
            Err(InputError::Parse {
                token: "nine".to_string(),
                position: 3
            })
        );
    }

    #[test]
    fn test_from_reader() {
        let input = PairInput::from_reader("2\n3 3\n6".as_bytes()).unwrap();
        assert_eq!(input.nums, vec![3, 3]);
        assert_eq!(input.target, 6);
    }

    #[test]
    fn test_error_messages() {
        let err = PairInput::parse("3 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "input truncated: expected 3 integers but only 1 were supplied"
        );
    }
}
