use std::fs;
use std::path::Path;

use drill_core::time::fixed_clock;
use drill_core::{Direction, SessionConfig};
use services::{ResultReporter, ScriptedConsole, SessionController, SessionError};
use storage::{FileRepository, MissedPhraseLog, load_dictionary};

const PAIRS: [(&str, &str); 4] = [
    ("dog", "pies"),
    ("cat", "kot (animal)"),
    ("house", "dom"),
    ("tree", "drzewo"),
];

fn write_collection(path: &Path, pairs: &[(&str, &str)]) {
    let text: String = pairs.iter().map(|(p, t)| format!("{p}\n{t}\n\n")).collect();
    fs::write(path, text).unwrap();
}

/// Answers every question correctly except `miss`, which is answered wrong
/// the first time it is asked. Yes/no prompts get `reverse` for the replay
/// question and "n" otherwise.
fn player(miss: Option<&'static str>, reverse: &'static str) -> ScriptedConsole {
    let mut missed = miss;
    ScriptedConsole::with_responder(move |fresh| {
        if fresh.ends_with("in reverse? Y/n\n") {
            return Some(reverse.to_owned());
        }
        if fresh.ends_with("Y/n\n") {
            return Some("n".to_owned());
        }
        let question = fresh.lines().last()?;
        if missed == Some(question) {
            missed = None;
            return Some("wrong".to_owned());
        }
        PAIRS.iter().find_map(|(p, t)| {
            if *p == question {
                Some(drill_core::model::strip_annotation(t).to_owned())
            } else if *t == question {
                Some((*p).to_owned())
            } else {
                None
            }
        })
    })
}

fn controller(
    file: &Path,
    errors_dir: &Path,
) -> SessionController<drill_core::Dictionary> {
    let repo = FileRepository::new(file);
    let dictionary = load_dictionary(&repo, SessionConfig::default()).unwrap();
    SessionController::new(
        dictionary,
        fixed_clock(),
        ResultReporter::new(MissedPhraseLog::new(errors_dir)),
    )
}

#[test]
fn duplicates_are_written_back_before_play() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.txt");
    write_collection(
        &file,
        &[PAIRS[0], PAIRS[1], PAIRS[0], PAIRS[2], PAIRS[3], PAIRS[1]],
    );

    let mut ctrl = controller(&file, dir.path());
    let mut console = player(None, "n");
    let report = ctrl.play(&mut console, Direction::Forward).unwrap();

    let stored = fs::read_to_string(&file).unwrap();
    assert_eq!(stored.matches("dog\n").count(), 1);
    assert_eq!(stored.matches("cat\n").count(), 1);
    assert!(console.transcript().contains("4 phrases have been loaded!"));
    assert_eq!(report.rounds[0].stats.guesses(), 4);
}

#[test]
fn perfect_round_scores_full_marks() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.txt");
    write_collection(&file, &PAIRS);

    let mut ctrl = controller(&file, dir.path());
    let mut console = player(None, "n");
    let report = ctrl.play(&mut console, Direction::Forward).unwrap();

    let round = report.rounds[0];
    assert_eq!(round.passes, 1);
    assert_eq!(round.stats.guesses(), 4);
    assert_eq!(round.stats.errors(), 0);
    assert!(console.transcript().contains("Success rate:\t\t\t100 %"));
    assert!(!dir.path().join("errors1.txt").exists());
}

#[test]
fn missed_phrase_is_logged_and_repeated() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.txt");
    write_collection(&file, &PAIRS);

    let mut ctrl = controller(&file, dir.path());
    let mut console = player(Some("dog"), "n");
    let report = ctrl.play(&mut console, Direction::Forward).unwrap();

    let round = report.rounds[0];
    assert_eq!(round.passes, 2);
    assert_eq!(round.stats.guesses(), 5);
    assert_eq!(round.stats.errors(), 1);

    let transcript = console.transcript();
    assert!(transcript.contains("Success rate:\t\t\t80 %"));
    assert_eq!(transcript.matches("\ndog\n").count(), 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("errors1.txt")).unwrap(),
        "dog\npies\n\n"
    );
}

#[test]
fn reverse_replay_uses_the_same_phrases() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.txt");
    write_collection(&file, &PAIRS);

    let mut ctrl = controller(&file, dir.path());
    let mut console = player(Some("dog"), "y");
    let report = ctrl.play(&mut console, Direction::Forward).unwrap();

    assert_eq!(report.rounds.len(), 2);
    let reverse = report.rounds[1];
    assert_eq!(reverse.direction, Direction::Reverse);
    assert_eq!(reverse.stats.guesses(), 4);
    assert_eq!(reverse.stats.errors(), 0);
    assert!(console.transcript().contains("Translate the following phrase:\nkot (animal)\n"));
}

#[test]
fn closed_input_aborts_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("words.txt");
    write_collection(&file, &PAIRS);

    let mut ctrl = controller(&file, dir.path());
    let mut console = ScriptedConsole::new(Vec::<String>::new());
    let err = ctrl.play(&mut console, Direction::Forward).unwrap_err();

    assert!(matches!(err, SessionError::InputClosed));
}
