use pretty_assertions::assert_eq;

use chart_rs::chart::prelude::*;

const SOURCE: &str = "[Song]
{
  Name = \"First\"
  Resolution = 192
  Name = \"Second\"
}
[ExpertSingle]
{
  0 = N 0 0
}
[Song]
{
  Resolution = 480
}
[ExpertSingle]
{
  0 = N 1 0
  192 = N 2 0
}
";

/// Test AlwaysUseOlder behavior with metadata and section conflicts
#[test]
fn test_always_use_older() {
    let chart = load_with_prompter(SOURCE.as_bytes(), AlwaysUseOlder).unwrap();
    assert_eq!(chart.metadata().name(), Some("First"));
    assert_eq!(chart.metadata().resolution(), Some(192));
    assert_eq!(
        chart
            .instrument(Difficulty::Expert, Instrument::Single)
            .map(|track| track.len()),
        Some(1)
    );
}

/// Test AlwaysUseNewer behavior, which is the default of `load`
#[test]
fn test_always_use_newer() {
    let chart = load_with_prompter(SOURCE.as_bytes(), AlwaysUseNewer).unwrap();
    assert_eq!(chart.metadata().name(), Some("Second"));
    assert_eq!(chart.metadata().resolution(), Some(480));
    assert_eq!(
        chart
            .instrument(Difficulty::Expert, Instrument::Single)
            .map(|track| track.len()),
        Some(2)
    );
    assert_eq!(load_str(SOURCE).unwrap(), chart);
}

/// Test AlwaysHalt stops at the first conflict
#[test]
fn test_always_halt() {
    let Err(LoadError::Parse(err)) = load_with_prompter(SOURCE.as_bytes(), AlwaysHalt) else {
        panic!("expected a halt");
    };
    assert_eq!(
        err.content(),
        &ParseError::Duplicated {
            what: "metadata key `Name`".to_owned()
        }
    );
    assert_eq!(err.line(), 5);
}

#[derive(Default)]
struct Recorder {
    seen: Vec<String>,
}

impl Prompter for Recorder {
    fn handle_duplication(&mut self, duplication: Duplication<'_>) -> DuplicationWorkaround {
        let workaround = match &duplication {
            Duplication::Metadata { newer, .. } if newer.as_integer().is_some() => {
                DuplicationWorkaround::UseNewer
            }
            _ => DuplicationWorkaround::UseOlder,
        };
        self.seen.push(duplication.to_string());
        workaround
    }
}

/// Test a custom prompter borrowed mutably, which sees every conflict in order
#[test]
fn test_custom_prompter() {
    let mut recorder = Recorder::default();
    let chart = load_with_prompter(SOURCE.as_bytes(), &mut recorder).unwrap();

    assert_eq!(
        recorder.seen,
        vec![
            "metadata key `Name`".to_owned(),
            "metadata key `Resolution`".to_owned(),
            "section `[ExpertSingle]`".to_owned(),
        ]
    );
    assert_eq!(chart.metadata().name(), Some("First"));
    assert_eq!(chart.metadata().resolution(), Some(480));
    assert_eq!(
        chart
            .instrument(Difficulty::Expert, Instrument::Single)
            .map(|track| track.len()),
        Some(1)
    );
}
