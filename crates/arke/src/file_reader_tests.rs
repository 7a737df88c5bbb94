#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::test_utils::temp_file_with_content;

#[test]
fn small_file_is_read_into_memory() {
    let file = temp_file_with_content("@ IN A 192.0.2.1\n");
    let content = FileContent::read(file.path()).unwrap();
    assert!(!content.is_mapped());
    assert_eq!(content.as_str(), "@ IN A 192.0.2.1\n");
}

#[test]
fn large_file_is_memory_mapped() {
    let line = "host IN A 192.0.2.1\n";
    let count = (MMAP_THRESHOLD as usize / line.len()) + 1;
    let file = temp_file_with_content(&line.repeat(count));

    let content = FileContent::read(file.path()).unwrap();
    assert!(content.is_mapped());
    assert!(content.as_str().starts_with(line));
}

#[test]
fn small_invalid_utf8_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
    file.flush().unwrap();

    let err = FileContent::read(file.path()).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn large_invalid_utf8_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    let mut bytes = vec![b'a'; MMAP_THRESHOLD as usize];
    bytes.push(0xff);
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let err = FileContent::read(file.path()).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn missing_file_is_an_error() {
    let err = FileContent::read(Path::new("/nonexistent/zone.db")).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
