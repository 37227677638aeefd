extern crate csv;

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Fatal conditions encountered while loading a dataset. Empty splits are not
/// errors, they are reported as warnings and handled by the caller.
#[derive(Debug)]
pub enum DatasetError {
    /// The columns selector does not name a known schema.
    UnknownSchema(String),
    /// A mandatory split file (train or test) is absent.
    MissingFile(PathBuf),
    /// A split file could not be read or parsed.
    Read(csv::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DatasetError::UnknownSchema(ref selector) =>
                write!(formatter, "'{}' is not a recognized columns selector, must be one of 'UI'.", selector),
            DatasetError::MissingFile(ref path) =>
                write!(formatter, "{} does not exist.", path.display()),
            DatasetError::Read(ref error) =>
                write!(formatter, "unable to read interactions: {}", error),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DatasetError::Read(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<csv::Error> for DatasetError {
    fn from(error: csv::Error) -> Self {
        DatasetError::Read(error)
    }
}
