/// Errors that end a sorting run.
///
/// Every variant aborts the remaining work. Files moved before the error
/// stay where they were moved; nothing is rolled back.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The root does not exist or is not a directory. Nothing was touched.
    #[error("Invalid directory path: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// Access was refused while reading the tree or moving a file.
    #[error("Permission denied when accessing {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory walker failed for a reason other than permissions.
    #[error("failed to read directory tree: {0}")]
    Walk(#[from] jwalk::Error),

    /// Any other I/O failure while creating folders or moving files.
    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Wrap an I/O error, routing `PermissionDenied` to its own variant.
    pub(crate) fn from_io(op: &'static str, path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::Io { op, path, source }
        }
    }

    /// `true` for the resource-error branch caused by denied access.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Walk(err) => err
                .io_error()
                .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_io_is_classified() {
        let err = SortError::from_io(
            "move",
            PathBuf::from("a.txt"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(err.is_permission_denied());
        assert!(matches!(err, SortError::PermissionDenied { .. }));
    }

    #[test]
    fn other_io_is_not_permission_denied() {
        let err = SortError::from_io(
            "move",
            PathBuf::from("a.txt"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(!err.is_permission_denied());
        assert!(err.to_string().starts_with("move a.txt"));
    }

    #[test]
    fn invalid_root_message_names_the_path() {
        let err = SortError::InvalidRoot(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Invalid directory path: /no/such/dir");
    }
}
