//! Tests for the Session Loop
//!
//! These tests verify:
//! - Terminal states (end of input, blank line, exit)
//! - Tokenizing and command resolution
//! - Usage errors never reach the server
//! - Fatal errors end the loop

#[path = "../common/mod.rs"]
mod common;

use std::io::Cursor;

use common::{dispatcher, finish, name, reply, ScriptedPeer};
use filewire::client::{tokenize, ClientCommand, CommandTable, Parsed, Verb};
use filewire::protocol::{CommandType, Header};
use filewire::{CloseReason, FilewireError, Session};
use tempfile::TempDir;

/// Run a session over `input` against a scripted server
fn run(input: &str, script: Vec<u8>) -> (filewire::Result<CloseReason>, ScriptedPeer, String, String) {
    let temp = TempDir::new().unwrap();
    let d = dispatcher(ScriptedPeer::new(script), temp.path());
    let mut session = Session::new(Cursor::new(input.to_string()), CommandTable::new(), d);

    let result = session.run();
    let (peer, out, err) = finish(session.into_dispatcher());
    (result, peer, out, err)
}

// =============================================================================
// Command Table Tests
// =============================================================================

#[test]
fn test_tokenize_on_single_spaces() {
    assert_eq!(tokenize("get a.txt"), vec!["get", "a.txt"]);
    assert_eq!(tokenize("get  a.txt"), vec!["get", "", "a.txt"]);
    assert_eq!(tokenize("ls "), vec!["ls", ""]);
}

#[test]
fn test_table_resolves_every_keyword() {
    let table = CommandTable::new();
    for (keyword, verb) in [
        ("exit", Verb::Exit),
        ("help", Verb::Help),
        ("ls", Verb::Ls),
        ("get", Verb::Get),
        ("put", Verb::Put),
        ("rm", Verb::Rm),
    ] {
        assert_eq!(table.lookup(keyword), Some(verb));
    }
    assert_eq!(table.lookup("LS"), None);
    assert_eq!(table.lookup("quit"), None);
}

#[test]
fn test_parse_arity() {
    let table = CommandTable::new();
    assert_eq!(table.parse("ls"), Parsed::Command(ClientCommand::Ls));
    assert_eq!(table.parse("ls extra"), Parsed::Command(ClientCommand::Ls));
    assert_eq!(table.parse("get"), Parsed::Usage(Verb::Get));
    assert_eq!(table.parse("put "), Parsed::Usage(Verb::Put));
    assert_eq!(table.parse("rm  x"), Parsed::Usage(Verb::Rm));
    assert_eq!(
        table.parse("get a.txt trailing"),
        Parsed::Command(ClientCommand::Get(name("a.txt")))
    );
    assert_eq!(table.parse("fetch a.txt"), Parsed::Invalid);
}

#[test]
fn test_parse_rejects_long_filename() {
    let table = CommandTable::new();
    let line = format!("put {}", "x".repeat(100));
    assert!(matches!(
        table.parse(&line),
        Parsed::BadFilename { verb: Verb::Put, .. }
    ));
}

// =============================================================================
// Terminal State Tests
// =============================================================================

#[test]
fn test_end_of_input_closes_cleanly() {
    let (result, peer, _, _) = run("", Vec::new());
    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert!(peer.sent.is_empty());
}

#[test]
fn test_blank_line_closes_before_later_commands() {
    let (result, peer, _, _) = run("\nls\n", Vec::new());
    assert_eq!(result.unwrap(), CloseReason::BlankLine);
    assert!(peer.sent.is_empty());
}

#[test]
fn test_exit_closes_before_later_commands() {
    let (result, peer, _, _) = run("exit\nls\n", Vec::new());
    assert_eq!(result.unwrap(), CloseReason::Exit);
    assert!(peer.sent.is_empty());
}

#[test]
fn test_last_line_without_newline_is_dispatched() {
    let (result, peer, out, _) = run("ls", reply(CommandType::LsOut, b"a\n"));
    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert_eq!(out, "a\n");
    assert_eq!(peer.sent_requests().len(), 1);
}

// =============================================================================
// Dispatch Tests
// =============================================================================

#[test]
fn test_ls_scenario() {
    let (result, _, out, err) = run("ls\n", reply(CommandType::LsOut, b"a.txt\nb.txt\n"));
    assert!(result.is_ok());
    assert_eq!(out, "a.txt\nb.txt\n");
    assert!(err.is_empty());
}

#[test]
fn test_crlf_lines_are_accepted() {
    let (result, peer, _, _) = run("rm old\r\n", reply(CommandType::Ack, b""));
    assert!(result.is_ok());
    assert_eq!(
        peer.sent_requests()[0].0,
        Header::for_file(CommandType::Rm, name("old"))
    );
}

#[test]
fn test_invalid_command_continues() {
    let (result, peer, _, err) = run("frobnicate\nls\n", reply(CommandType::LsOut, b""));
    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert!(err.contains("frobnicate: invalid command"));
    assert_eq!(peer.sent_requests().len(), 1);
}

#[test]
fn test_non_utf8_line_is_invalid_and_session_continues() {
    let temp = TempDir::new().unwrap();
    let d = dispatcher(
        ScriptedPeer::new(reply(CommandType::LsOut, b"a\n")),
        temp.path(),
    );
    let input = Cursor::new(b"get caf\xe9.txt\nls\n".to_vec());
    let mut session = Session::new(input, CommandTable::new(), d);

    let result = session.run();
    let (peer, out, err) = finish(session.into_dispatcher());

    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert!(err.contains("get caf\u{FFFD}.txt: invalid command"));
    assert_eq!(out, "a\n");
    let requests = peer.sent_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, Header::bare(CommandType::Ls));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let (result, peer, _, err) = run("get\nput\nrm\n", Vec::new());
    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert!(err.contains("usage: get filename"));
    assert!(err.contains("usage: put filename"));
    assert!(err.contains("usage: rm filename"));
    assert!(peer.sent.is_empty());
}

#[test]
fn test_help_is_local() {
    let (result, peer, out, _) = run("help\n", Vec::new());
    assert!(result.is_ok());
    assert!(out.contains("get filename - Copy remote file to local host."));
    assert!(peer.sent.is_empty());
}

#[test]
fn test_mismatch_continues_session() {
    let mut script = reply(CommandType::Nak, b"");
    script.extend(reply(CommandType::LsOut, b"z\n"));
    let (result, _, out, err) = run("get missing.txt\nls\n", script);

    assert_eq!(result.unwrap(), CloseReason::EndOfInput);
    assert!(err.contains("missing.txt is not a file"));
    assert_eq!(out, "z\n");
}

#[test]
fn test_transport_failure_ends_session() {
    let (result, peer, _, _) = run("ls\nls\n", Vec::new());
    assert!(matches!(result, Err(FilewireError::Network(_))));
    // Only the first request went out
    assert_eq!(peer.sent_requests().len(), 1);
}
