use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    InvalidArgument(String),
    UnknownAlgorithm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            Error::UnknownAlgorithm(name) => write!(
                f,
                "Unknown Algorithm: \"{}\" (expected one of dice, levenshtein, jaccard)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
