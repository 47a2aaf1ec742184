use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn generate_with_seed_is_reproducible() {
    let run = || {
        let mut cmd = cargo_bin_cmd!("rxgen");
        cmd.args(["generate", "a(b|c)d{2,3}", "--seed", "11", "--count", "5"]);
        cmd.assert().success().get_output().stdout.clone()
    };
    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    let re = regex::Regex::new("^a[bc]d{2,3}$").unwrap();
    assert!(lines.iter().all(|line| re.is_match(line)), "{text}");
}

#[test]
fn generate_json_output() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.args(["generate", "[xyz]", "--seed", "3", "--count", "2", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["pattern"], "[xyz]");
    assert_eq!(value["seed"], 3);
    assert_eq!(value["samples"].as_array().map(Vec::len), Some(2));
}

#[test]
fn generate_reads_config_file() {
    let path = std::env::temp_dir().join(format!("rxgen-cli-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[generator]\nunbounded_extra = 0\n[output]\ncount = 3").unwrap();

    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.arg("generate").arg("ab+").arg("--config").arg(&path);
    cmd.assert().success().stdout("ab\nab\nab\n");

    std::fs::remove_file(&path).ok();
}

#[test]
fn generate_reads_environment() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.env("RXGEN_GENERATOR__UNBOUNDED_EXTRA", "0")
        .env("RXGEN_OUTPUT__COUNT", "2")
        .args(["generate", "ab+", "--seed", "1"]);
    cmd.assert().success().stdout("ab\nab\n");
}

#[test]
fn flags_override_environment() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.env("RXGEN_GENERATOR__UNBOUNDED_EXTRA", "0")
        .env("RXGEN_OUTPUT__COUNT", "2")
        .args(["generate", "ab+", "--seed", "1", "--count", "3"]);
    cmd.assert().success().stdout("ab\nab\nab\n");
}

#[test]
fn generate_reads_local_config_when_present() {
    let dir = std::env::temp_dir().join(format!("rxgen-local-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("rxgen.toml"),
        "[generator]\nunbounded_extra = 0\n[output]\ncount = 2\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.current_dir(&dir).args(["generate", "x*y"]);
    cmd.assert().success().stdout("y\ny\n");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn generate_rejects_malformed_pattern() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.args(["generate", "a{3,1}"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:").and(predicate::str::contains("inverted")));
}

#[test]
fn tokens_lists_one_token_per_line() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.args(["tokens", "a|b*"]);
    cmd.assert().success().stdout(
        predicate::str::contains("Char")
            .and(predicate::str::contains("Pipe"))
            .and(predicate::str::contains("Star"))
            .and(predicate::function(|out: &str| out.lines().count() == 4)),
    );
}

#[test]
fn check_reports_ok_and_ast() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.args(["check", "[a-c]", "--ast"]);
    cmd.assert().success().stdout(
        predicate::str::contains("character-class(a-c)").and(predicate::str::ends_with("ok\n")),
    );
}

#[test]
fn check_fails_on_unclosed_group() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.args(["check", "(ab"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_subcommand_shows_help() {
    let mut cmd = cargo_bin_cmd!("rxgen");
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}
