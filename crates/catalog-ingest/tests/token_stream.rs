use std::fs;
use std::io::Cursor;

use catalog_ingest::{IngestError, LineState, StreamState, TokenStream};

fn collect_lines<R: std::io::BufRead>(stream: &mut TokenStream<R>) -> Vec<(u64, Vec<String>)> {
    let mut lines = Vec::new();
    while stream.has_more_lines() {
        stream.next_line().expect("read line");
        let mut tokens = Vec::new();
        while stream.has_more_tokens() {
            tokens.push(stream.next_token());
        }
        lines.push((stream.line_number(), tokens));
    }
    lines
}

#[test]
fn reads_lines_and_tokens_in_order() {
    let text = "CSCI100,Introduction to Computer Science\nCSCI101,Introduction to Programming in C++,CSCI100\n";
    let mut stream = TokenStream::from_reader("courses", Cursor::new(text)).expect("stream");
    let lines = collect_lines(&mut stream);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, 1);
    assert_eq!(
        lines[0].1,
        vec!["CSCI100", "Introduction to Computer Science"]
    );
    assert_eq!(lines[1].0, 2);
    assert_eq!(
        lines[1].1,
        vec!["CSCI101", "Introduction to Programming in C++", "CSCI100"]
    );
    assert_eq!(stream.stream_state(), StreamState::Exhausted);
}

#[test]
fn blank_lines_have_no_tokens_but_count_toward_line_numbers() {
    let mut stream =
        TokenStream::from_reader("courses", Cursor::new("A,a\n\n\nB,b")).expect("stream");
    let lines = collect_lines(&mut stream);

    let numbered: Vec<u64> = lines
        .iter()
        .filter(|(_, tokens)| !tokens.is_empty())
        .map(|(line, _)| *line)
        .collect();
    assert_eq!(numbered, vec![1, 4]);
    assert_eq!(lines.len(), 4);
}

#[test]
fn trailing_comma_yields_empty_token() {
    let mut stream = TokenStream::from_reader("courses", Cursor::new("CS101,Intro,")).expect("stream");
    let lines = collect_lines(&mut stream);
    assert_eq!(lines[0].1, vec!["CS101", "Intro", ""]);
}

#[test]
fn whitespace_is_not_trimmed() {
    let mut stream =
        TokenStream::from_reader("courses", Cursor::new(" CS101 , Intro ")).expect("stream");
    let lines = collect_lines(&mut stream);
    assert_eq!(lines[0].1, vec![" CS101 ", " Intro "]);
}

#[test]
fn single_token_line_is_exhausted_after_first_token() {
    let mut stream = TokenStream::from_reader("courses", Cursor::new("CS101\n")).expect("stream");
    stream.next_line().expect("read line");
    assert_eq!(stream.line_state(), LineState::HasMoreTokens);
    assert_eq!(stream.next_token(), "CS101");
    assert_eq!(stream.line_state(), LineState::LineExhausted);
    assert_eq!(stream.next_token(), "");
}

#[test]
fn next_line_on_exhausted_stream_is_empty() {
    let mut stream = TokenStream::from_reader("courses", Cursor::new("A,a")).expect("stream");
    stream.next_line().expect("read line");
    assert!(!stream.has_more_lines());
    stream.next_line().expect("read past end");
    assert!(!stream.has_more_tokens());
}

#[test]
fn empty_input_is_rejected() {
    let error = TokenStream::from_reader("empty", Cursor::new("")).err().expect("empty input");
    assert!(matches!(error, IngestError::EmptyInput { .. }));
    assert_eq!(error.to_string(), "error: empty file: empty");
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    let error = TokenStream::open(&path).err().expect("missing file");
    assert!(matches!(error, IngestError::Open { .. }));
    assert!(error.to_string().starts_with("error opening file"));
}

#[test]
fn opens_file_and_resets() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("courses.csv");
    fs::write(&path, "MATH201,Discrete Mathematics\nCSCI300,Introduction to Algorithms,MATH201\n")
        .expect("write file");

    let mut stream = TokenStream::open(&path).expect("open");
    assert_eq!(stream.source_name(), path.display().to_string());
    let first = collect_lines(&mut stream);
    stream.reset().expect("reset");
    let second = collect_lines(&mut stream);
    assert_eq!(first, second);
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let bytes: Vec<u8> = b"A,a\n\xff\xfe,b\n".to_vec();
    let mut stream = TokenStream::from_reader("binary", Cursor::new(bytes)).expect("stream");
    let error = stream.next_line().err().expect("read error");
    match error {
        IngestError::Read { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}
