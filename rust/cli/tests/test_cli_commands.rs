use holdem_cli::run;
use serial_test::serial;
use std::io::Write;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => unsafe { std::env::set_var(self.key, prev) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn clean_env() -> Vec<TempEnvVar> {
    [
        "HOLDEM_CONFIG",
        "HOLDEM_STARTING_STACK",
        "HOLDEM_RAISE_INCREMENT",
        "HOLDEM_SETTLE_TICKS",
        "HOLDEM_SEED",
        "HOLDEM_POLICY",
    ]
    .into_iter()
    .map(TempEnvVar::unset)
    .collect()
}

#[test]
fn help_lists_expected_commands() {
    let (code, out, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "eval", "deal", "cfg"] {
        assert!(out.contains(cmd), "help should list {}", cmd);
    }
}

#[test]
fn unknown_command_exits_2() {
    let (code, out, err) = run_cli(&["shuffle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(!err.is_empty());
}

#[test]
fn eval_compares_two_hands() {
    let (code, out, _) = run_cli(&[
        "eval", "As", "Ks", "Qs", "Js", "Ts", "--against", "9h", "9c", "9d", "9s", "2c",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand: Straight Flush [14]"), "{}", out);
    assert!(out.contains("Against: Four of a Kind [9 2]"), "{}", out);
    assert!(out.contains("Result: first hand wins"), "{}", out);
}

#[test]
fn eval_with_bad_card_exits_2() {
    let (code, _, err) = run_cli(&["eval", "As", "Ks", "Qs", "Js", "1x"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid card code '1x'"), "{}", err);
}

#[test]
fn deal_is_reproducible() {
    let (code, first, _) = run_cli(&["deal", "--seed", "77"]);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&["deal", "--seed", "77"]);
    assert_eq!(first, second);
    assert!(first.starts_with("Seed: 77\n"));
}

#[test]
#[serial]
fn cfg_reports_file_and_env_layers() {
    let _env = clean_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_stack = 400\nraise_increment = 50").unwrap();
    let _cfg = TempEnvVar::set("HOLDEM_CONFIG", file.path().to_str().unwrap());
    let _inc = TempEnvVar::set("HOLDEM_RAISE_INCREMENT", "25");

    let (code, out, _) = run_cli(&["cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_stack"]["value"], 400);
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["raise_increment"]["value"], 25);
    assert_eq!(json["raise_increment"]["source"], "env");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
#[serial]
fn play_uses_configured_stack_and_increment() {
    let _env = clean_env();
    let _stack = TempEnvVar::set("HOLDEM_STARTING_STACK", "300");
    let _inc = TempEnvVar::set("HOLDEM_RAISE_INCREMENT", "50");
    let (code, out, _) = run_cli(&[
        "play", "--seed", "5", "--hands", "1", "--tick-ms", "0", "--script", "raise,fold",
    ]);
    assert_eq!(code, 0, "{}", out);
    assert!(out.contains("stack=300"), "{}", out);
    assert!(out.contains("You raise 50."), "{}", out);
    assert!(out.contains("You folded. Bot wins 100."), "{}", out);
    assert!(out.contains("Final stacks: You 250 / Bot 350"), "{}", out);
}

#[test]
#[serial]
fn play_quit_mid_hand_exits_130() {
    let _env = clean_env();
    let (code, _, err) = run_cli(&["play", "--seed", "1", "--tick-ms", "0", "--script", "call q"]);
    assert_eq!(code, 130);
    assert!(err.contains("Interrupted"), "{}", err);
}

#[test]
#[serial]
fn play_rejects_invalid_config() {
    let _env = clean_env();
    let _policy = TempEnvVar::set("HOLDEM_POLICY", "random");
    let (code, out, err) = run_cli(&["play", "--script", "fold"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"), "{}", err);
}
