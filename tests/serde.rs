#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;

use chart_rs::chart::prelude::*;

#[test]
fn test_chart_through_json() {
    let chart = load_str(include_str!("files/full.chart")).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"ExpertGHLGuitar\""));

    let decoded: Chart = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, chart);
}

#[test]
fn test_track_id_as_string() {
    let id = TrackId::new(Difficulty::Hard, Instrument::DoubleBass);
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"HardDoubleBass\"");
    assert_eq!(
        serde_json::from_str::<TrackId>("\"HardDoubleBass\"").unwrap(),
        id
    );
    assert!(serde_json::from_str::<TrackId>("\"HardBanjo\"").is_err());
}

#[test]
fn test_errors_through_json() {
    let Err(LoadError::Parse(err)) = load_str("[Song]\n{\n  0 = 1\n}\n") else {
        panic!("expected a parse error");
    };
    let json = serde_json::to_string(&err).unwrap();
    let decoded: ParseErrorWithLine = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, err);
}
