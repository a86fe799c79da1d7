use std::io::{self, ErrorKind};

use tracing::Level;
use upcase_file::logging::level_for;
use upcase_file::ReadError;

#[test]
fn test_read_errors_are_classified_by_kind() {
    let not_found = ReadError::from_io(io::Error::from(ErrorKind::NotFound));
    assert!(matches!(not_found, ReadError::NotFound(_)));

    let not_dir = ReadError::from_io(io::Error::from(ErrorKind::NotADirectory));
    assert!(matches!(not_dir, ReadError::NotFound(_)));

    let denied = ReadError::from_io(io::Error::from(ErrorKind::PermissionDenied));
    assert!(matches!(denied, ReadError::PermissionDenied(_)));

    let is_dir = ReadError::from_io(io::Error::from(ErrorKind::IsADirectory));
    assert!(matches!(is_dir, ReadError::Io(_)));

    let bad_data = ReadError::from(io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"));
    assert!(matches!(bad_data, ReadError::Io(_)));
    assert_eq!(bad_data.to_string(), "stream did not contain valid UTF-8");
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(level_for(0), Level::WARN);
    assert_eq!(level_for(1), Level::INFO);
    assert_eq!(level_for(2), Level::DEBUG);
    assert_eq!(level_for(7), Level::DEBUG);
}
