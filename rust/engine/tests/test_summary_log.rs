use std::sync::{Arc, Mutex};

use holdem_engine::engine::{Engine, EngineConfig};
use holdem_engine::logger::HandSummary;
use holdem_engine::player::Intent;
use holdem_engine::policy::CallOrShove;

fn play_folds(hands: u32) -> Engine {
    let config = EngineConfig {
        seed: Some(17),
        settle_ticks: 0,
        ..EngineConfig::default()
    };
    let mut eng = Engine::new(config, Box::new(CallOrShove));
    for _ in 0..hands {
        eng.tick();
        eng.apply_player_intent(Intent::Fold);
    }
    eng
}

#[test]
fn jsonl_has_one_parseable_line_per_hand() {
    let eng = play_folds(3);
    let mut buf = Vec::new();
    eng.summaries().write_jsonl(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(text.ends_with('\n'));
    for (i, line) in lines.iter().enumerate() {
        let rec: HandSummary = serde_json::from_str(line).unwrap();
        assert_eq!(rec.hand_number, i as u32 + 1);
        assert!(rec.ts.is_some(), "logged summaries are timestamped");
        assert_eq!(&rec, &eng.summaries().entries()[i]);
    }
}

#[test]
fn summary_line_reads_like_a_hand_history() {
    let eng = play_folds(1);
    let line = eng.summaries().entries()[0].to_string();
    assert!(line.starts_with("Hand 1: Board - | You: "), "{}", line);
    assert!(line.ends_with("| Winner: Bot | Won: 0"), "{}", line);
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn completed_hands_and_rejections_are_traced() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut eng = play_folds(1);
        eng.apply_player_intent(Intent::Call);
    });
    let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(out.contains("hand complete"), "{}", out);
    assert!(out.contains("input rejected"), "{}", out);
}
