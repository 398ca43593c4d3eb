// End-to-end runtime smoke tests (headless)
// - `app::run` with TALLYBOX_TEST_HEADLESS=1 skips raw TTY setup and the event thread,
//   so the loop ends as soon as it sees the closed event channel.
// - Config files land in a per-binary temp dir, never the real home.
// - `run_event_loop` is driven directly with a TestBackend and scripted events.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use tallybox::app::{RunOptions, run, run_event_loop};
use tallybox::state::AppState;
use tallybox::theme::set_config_dir_override;

/// Pin every config read and write of this test binary to one temp dir.
fn isolated_config_dir() -> &'static Path {
    static DIR: OnceLock<tempfile::TempDir> = OnceLock::new();
    let dir = DIR.get_or_init(|| tempfile::tempdir().expect("tempdir"));
    set_config_dir_override(dir.path().to_path_buf());
    dir.path()
}

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_exits() {
    let dir = isolated_config_dir();
    // Bypass the terminal
    unsafe {
        std::env::set_var("TALLYBOX_TEST_HEADLESS", "1");
    }

    let options = RunOptions {
        history_file: None,
        persist: false,
    };
    let outcome = tokio::time::timeout(Duration::from_secs(5), run(options))
        .await
        .expect("headless run should finish once the event channel closes");
    if let Err(e) = outcome {
        panic!("app::run returned error: {e:?}");
    }
    assert!(dir.join("settings.conf").exists());
    assert!(dir.join("theme.conf").exists());
    assert!(!dir.join("calculatorHistory.json").exists());
}

#[tokio::test]
async fn event_loop_processes_scripted_events_until_exit() {
    isolated_config_dir();
    let mut terminal = Some(Terminal::new(TestBackend::new(80, 24)).expect("terminal"));
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<CEvent>();

    for code in [
        KeyCode::Char('1'),
        KeyCode::Char('+'),
        KeyCode::Char('2'),
        KeyCode::Enter,
    ] {
        tx.send(CEvent::Key(KeyEvent::new(code, KeyModifiers::empty())))
            .expect("send");
    }
    tx.send(CEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )))
    .expect("send");
    // Never reached: the loop stops at the exit chord
    tx.send(CEvent::Key(KeyEvent::new(
        KeyCode::Char('9'),
        KeyModifiers::empty(),
    )))
    .expect("send");

    run_event_loop(&mut terminal, &mut app, &mut rx).await;
    assert_eq!(app.calc.history(), ["1 + 2 = 3"]);
    assert_eq!(app.calc.current_operand(), "3");
    assert_eq!(app.keypad_rects.len(), 19);
}

#[tokio::test]
async fn event_loop_ends_when_channel_closes() {
    isolated_config_dir();
    let mut terminal: Option<Terminal<TestBackend>> = None;
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<CEvent>();
    tx.send(CEvent::Key(KeyEvent::new(
        KeyCode::Char('7'),
        KeyModifiers::empty(),
    )))
    .expect("send");
    drop(tx);

    run_event_loop(&mut terminal, &mut app, &mut rx).await;
    assert_eq!(app.calc.current_operand(), "7");
}
