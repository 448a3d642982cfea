//! Header Tests
//!
//! Filename validation, command codes and header rendering.

use filewire::protocol::{CommandType, Filename, Header, MAX_FILENAME_LEN};

// =============================================================================
// Filename Tests
// =============================================================================

#[test]
fn test_filename_accepts_max_length() {
    let name = "a".repeat(MAX_FILENAME_LEN);
    let filename = Filename::new(name.clone()).unwrap();
    assert_eq!(filename.as_str(), name);
}

#[test]
fn test_filename_rejects_over_capacity() {
    let result = Filename::new("a".repeat(MAX_FILENAME_LEN + 1));
    assert!(result.unwrap_err().to_string().contains("filename too long"));
}

#[test]
fn test_filename_length_counts_bytes() {
    // 30 two-byte characters = 60 bytes
    let result = Filename::new("é".repeat(30));
    assert!(result.is_err());
}

#[test]
fn test_filename_rejects_empty_and_nul() {
    assert!(Filename::new("").is_err());
    assert!(Filename::new("a\0b").is_err());
}

// =============================================================================
// Command Code Tests
// =============================================================================

#[test]
fn test_codes_are_stable() {
    let expected = [
        (CommandType::Error, 0),
        (CommandType::Exit, 1),
        (CommandType::Get, 2),
        (CommandType::Help, 3),
        (CommandType::Ls, 4),
        (CommandType::Put, 5),
        (CommandType::Rm, 6),
        (CommandType::FileOut, 7),
        (CommandType::LsOut, 8),
        (CommandType::Ack, 9),
        (CommandType::Nak, 10),
    ];
    for (command, code) in expected {
        assert_eq!(command.code(), code);
        assert_eq!(CommandType::from_code(code), Some(command));
    }
    assert_eq!(CommandType::from_code(11), None);
}

#[test]
fn test_only_exit_and_help_are_local() {
    assert!(!CommandType::Exit.is_wire());
    assert!(!CommandType::Help.is_wire());
    assert!(CommandType::Ls.is_wire());
    assert!(CommandType::Error.is_wire());
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_header_display() {
    let header = Header::for_file(CommandType::Nak, Filename::new("a.txt").unwrap()).with_nbytes(2);
    assert_eq!(header.to_string(), "{2, NAK, \"a.txt\"}");
    assert_eq!(Header::bare(CommandType::LsOut).to_string(), "{0, LSOUT, \"\"}");
}
