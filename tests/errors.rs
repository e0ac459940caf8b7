use chart_rs::chart::prelude::*;

fn parse_error(source: &str) -> ParseErrorWithLine {
    match load_str(source) {
        Err(LoadError::Parse(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_unterminated_block() {
    let err = parse_error("[Song]\n{\n  Name = \"x\"\n}\n[Events]\n{\n  0 = E \"a\"\n");
    assert_eq!(
        err.content(),
        &ParseError::UnterminatedBlock {
            section: "Events".to_owned()
        }
    );
    assert_eq!(err.line(), 5);
    assert_eq!(err.text(), "[Events]");
}

#[test]
fn test_structural_errors() {
    let err = parse_error("[Song]\n{\n  Name = \"x\"\n  oops\n}\n");
    assert_eq!(err.content(), &ParseError::InvalidBlockLine);
    assert_eq!(err.line(), 4);
    assert_eq!(err.text(), "  oops");

    let err = parse_error("[Song]\n{\n}\nstray\n");
    assert_eq!(err.content(), &ParseError::ExpectedSectionHeader);
    assert_eq!(err.line(), 4);

    let err = parse_error("[Song]\n{\n}\n[Expert-Single]\n{\n}\n");
    assert_eq!(
        err.content(),
        &ParseError::InvalidSectionHeader("Expert-Single".to_owned())
    );

    let err = parse_error("[Song]\n{\n}\n[ExpertGuitar]\n{\n}\n");
    assert_eq!(
        err.content(),
        &ParseError::UnknownSection("ExpertGuitar".to_owned())
    );
}

#[test]
fn test_semantic_errors() {
    let cases = [
        (
            "[Song]\n{\n  9Lives = 1\n}\n",
            ParseError::InvalidMetadataKey("9Lives".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[SyncTrack]\n{\n  0 = C 1\n}\n",
            ParseError::InvalidSyncEvent("C 1".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[SyncTrack]\n{\n  0 = B -1\n}\n",
            ParseError::InvalidSyncEvent("B -1".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[SyncTrack]\n{\n  Zero = B 1\n}\n",
            ParseError::InvalidTime("Zero".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[Events]\n{\n  0 = N 0 0\n}\n",
            ParseError::InvalidEvent("N 0 0".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[Lyrics]\n{\n  0 = S 0 0\n}\n",
            ParseError::InvalidLyric("S 0 0".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[EasySingle]\n{\n  0 = Q 0 0\n}\n",
            ParseError::InvalidTrackItem("Q 0 0".to_owned()),
        ),
        (
            "[Song]\n{\n}\n[EasySingle]\n{\n  0 = N 0 0 0\n}\n",
            ParseError::InvalidFieldCount {
                kind: "N".to_owned(),
                min: 2,
                max: 2,
                found: 3,
            },
        ),
        (
            "[Song]\n{\n}\n[EasySingle]\n{\n  0 = N 7 0\n}\n",
            ParseError::FlagWithoutNote(7),
        ),
        (
            "[Song]\n{\n}\n[EasySingle]\n{\n  0 = N 0 0\n  0 = N 200 0\n}\n",
            ParseError::FlagOutOfRange(200),
        ),
    ];
    for (source, expected) in cases {
        let err = parse_error(source);
        assert_eq!(err.content(), &expected, "{source:?}");
        assert!(err.line() > 1, "{source:?}");
    }
}

#[test]
fn test_flag_error_is_not_affected_by_other_tracks() {
    let source = "[Song]\n{\n}\n[ExpertSingle]\n{\n  0 = N 0 0\n}\n[HardSingle]\n{\n  0 = N 6 0\n}\n";
    let err = parse_error(source);
    assert_eq!(err.content(), &ParseError::FlagWithoutNote(6));
    assert_eq!(err.line(), 10);
}

#[test]
fn test_error_messages() {
    let err = parse_error("[Song]\n{\n}\n[Events]\n{\n  0 = E\n}\n");
    assert_eq!(
        err.to_string(),
        r#"invalid event `E` (line 6: "  0 = E")"#
    );
    let load_error = load_str("[Song]\n{\n").unwrap_err();
    assert_eq!(
        load_error.to_string(),
        r#"parse: section `[Song]` is not closed by `}` (line 1: "[Song]")"#
    );
    assert_eq!(
        LoadError::MissingSong.to_string(),
        "missing [Song] section"
    );
}
