use std::io;

use bru2md::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::CollectionNotFound { collection_dir: "/tmp/api".to_string() };
    assert_eq!(
        err.to_string(),
        "'bruno.json' not found in '/tmp/api'. Please provide a valid Bruno collection directory."
    );
}
