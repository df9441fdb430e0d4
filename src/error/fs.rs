//! File system errors

use std::path::Path;

use super::{MartyError, display_path};

/// Creates a directory read error
pub fn dir_read_failed(path: impl Into<String>, reason: impl ToString) -> MartyError {
    MartyError::DirectoryReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a directory create error
pub fn dir_create_failed(path: impl Into<String>, reason: impl ToString) -> MartyError {
    MartyError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> MartyError {
    MartyError::FileReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> MartyError {
    MartyError::FileWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file remove error
pub fn remove_failed(path: impl Into<String>, reason: impl ToString) -> MartyError {
    MartyError::FileRemoveFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error without an underlying source
pub fn io_error(message: impl Into<String>) -> MartyError {
    MartyError::IoError {
        message: message.into(),
        source: None,
    }
}

/// Path-taking shorthand used by the `map_err` call sites.
pub(crate) fn on_read(path: &Path) -> impl FnOnce(std::io::Error) -> MartyError + '_ {
    move |e| read_failed(display_path(path), e)
}

pub(crate) fn on_write(path: &Path) -> impl FnOnce(std::io::Error) -> MartyError + '_ {
    move |e| write_failed(display_path(path), e)
}

pub(crate) fn on_remove(path: &Path) -> impl FnOnce(std::io::Error) -> MartyError + '_ {
    move |e| remove_failed(display_path(path), e)
}

pub(crate) fn on_create_dir(path: &Path) -> impl FnOnce(std::io::Error) -> MartyError + '_ {
    move |e| dir_create_failed(display_path(path), e)
}
