//! Flattening a feature file to disk in both modes.

use std::fs;
use std::path::{Path, PathBuf};

use manyworlds::grammar::parse_table_row;
use manyworlds::{FlattenError, FlattenMode, FlattenOptions, Forest, Step};
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[fixture]
#[expect(clippy::expect_used, reason = "fixture file is well formed")]
fn forest() -> Forest {
    Forest::from_path(fixture_path("feature.feature")).expect("parse fixture")
}

#[rstest]
#[case(FlattenMode::Strict, false, "expected/strict.feature")]
#[case(FlattenMode::Strict, true, "expected/strict_with_comments.feature")]
#[case(FlattenMode::Relaxed, false, "expected/relaxed.feature")]
#[case(FlattenMode::Relaxed, true, "expected/relaxed_with_comments.feature")]
#[expect(clippy::expect_used, reason = "behavioural tests use explicit panics")]
fn writes_flat_file(
    mut forest: Forest,
    #[case] mode: FlattenMode,
    #[case] write_comments: bool,
    #[case] expected: &str,
) {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("flat.feature");
    let options = FlattenOptions::default()
        .with_mode(mode)
        .with_comments(write_comments);
    forest.flatten(&out, options).expect("write flat file");

    let written = fs::read_to_string(&out).expect("read flat file");
    let wanted = fs::read_to_string(fixture_path(expected)).expect("read expected file");
    assert_eq!(written, wanted);
}

#[rstest]
fn relaxed_checks_every_assertion_exactly_once(mut forest: Forest) {
    let flat = forest.flatten_scenarios(FlattenMode::Relaxed);
    for scenario in forest.scenarios() {
        for assertion in scenario.assertions() {
            let occurrences = flat
                .iter()
                .flat_map(|flat_scenario| flat_scenario.steps())
                .filter(|step| *step == assertion)
                .count();
            assert_eq!(
                occurrences,
                1,
                "assertion {assertion} of {} should be checked once",
                scenario.name()
            );
        }
    }
}

#[rstest]
fn strict_keeps_ancestor_setup_before_own_steps(mut forest: Forest) {
    let flat = forest.flatten_scenarios(FlattenMode::Strict);
    assert_eq!(flat.len(), 8);
    for scenario in &flat {
        let mut steps = scenario.steps().iter().map(|step| step.format(true));
        assert_eq!(steps.next().as_deref(), Some("Given the following users:"));
        assert_eq!(steps.next().as_deref(), Some("When I go to \"Users\""));
    }
}

#[rstest]
#[expect(clippy::expect_used, reason = "behavioural tests use explicit panics")]
fn rendered_tables_parse_back_to_the_same_cells(mut forest: Forest) {
    let rendered = forest.render(FlattenOptions::default());
    let rows: Vec<Vec<String>> = rendered
        .lines()
        .skip_while(|line| !line.starts_with("Given the following users:"))
        .skip(1)
        .take_while(|line| line.trim_start().starts_with('|'))
        .map(|line| {
            parse_table_row(line.trim())
                .expect("rendered row should parse")
                .into_cells()
        })
        .collect();

    let root = forest.find(&["View users"]).expect("root scenario");
    let table = root
        .prerequisites()
        .next()
        .and_then(Step::data)
        .expect("users table");
    assert_eq!(rows, table.to_list_of_lists());
}

#[rstest]
#[expect(clippy::expect_used, reason = "behavioural tests use explicit panics")]
fn unwritable_destination_reports_path(mut forest: Forest) {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("missing").join("flat.feature");
    let err = forest
        .flatten(&out, FlattenOptions::default())
        .expect_err("missing directory should fail");
    let FlattenError::Io { path, .. } = &err else {
        panic!("expected an I/O error, got {err:?}");
    };
    assert_eq!(path, &out);
    assert!(!out.exists());
}

#[rstest]
#[expect(clippy::expect_used, reason = "behavioural tests use explicit panics")]
fn existing_destination_is_replaced(mut forest: Forest) {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("flat.feature");
    fs::write(&out, "stale content that is much longer than nothing").expect("seed file");
    forest
        .flatten(&out, FlattenOptions::default())
        .expect("write flat file");
    let written = fs::read_to_string(&out).expect("read flat file");
    assert!(written.starts_with("Feature: User Deactivation\n"));
    assert!(!written.contains("stale"));
}

#[test]
#[expect(clippy::expect_used, reason = "behavioural tests use explicit panics")]
fn options_from_lookup_drive_flattening() {
    let options = FlattenOptions::from_lookup(|key| match key {
        manyworlds::FLATTEN_MODE_ENV => Some("relaxed".to_string()),
        manyworlds::WRITE_COMMENTS_ENV => Some("yes".to_string()),
        _ => None,
    })
    .expect("valid options");
    let mut forest = Forest::from_path(fixture_path("feature.feature")).expect("parse fixture");
    let rendered = forest.render(options);
    let wanted = fs::read_to_string(fixture_path("expected/relaxed_with_comments.feature"))
        .expect("read expected file");
    assert_eq!(rendered, wanted);
}
