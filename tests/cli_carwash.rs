use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "carwash-sim-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn carwash_fixed_intervals_prints_summary_and_writes_stats_json() {
    let dir = unique_temp_dir("fixed");
    let out_json = dir.join("stats.json");

    let output = Command::new(env!("CARGO_BIN_EXE_carwash"))
        .args([
            "--intervals",
            "2,4,1",
            "--until",
            "20",
            "--stats-json",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run carwash");
    assert!(
        output.status.success(),
        "carwash failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Average wait time: 0.67 minutes."), "stdout={stdout}");
    assert!(stdout.contains("Car wash utilization rate: 42.86%."), "stdout={stdout}");

    let raw = fs::read_to_string(&out_json).expect("read stats.json");
    let v: Value = serde_json::from_str(&raw).expect("parse stats.json");
    let waits = v["log"]["waits"].as_array().expect("waits array");
    let wait_times: Vec<f64> = waits
        .iter()
        .map(|w| w["wait"].as_f64().expect("wait"))
        .collect();
    assert_eq!(wait_times, vec![0.0, 0.0, 2.0]);
    assert_eq!(v["summary"]["cars_served"].as_u64(), Some(3));
    assert_eq!(v["log"]["samples"].as_array().map(|a| a.len()), Some(21));
    assert_eq!(v["config"]["horizon"].as_f64(), Some(20.0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn carwash_reads_config_file_and_flags_override_it() {
    let dir = unique_temp_dir("config");
    let cfg = write_file(
        &dir,
        "scenario.json",
        r#"{ "wash_duration": 10.0, "horizon": 20.0, "intervals": [2, 4, 1] }"#,
    );
    let out_json = dir.join("stats.json");

    let output = Command::new(env!("CARGO_BIN_EXE_carwash"))
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "--service",
            "3",
            "--stats-json",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run carwash");
    assert!(
        output.status.success(),
        "carwash failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: Value =
        serde_json::from_str(&fs::read_to_string(&out_json).expect("read stats.json"))
            .expect("parse stats.json");
    assert_eq!(v["config"]["wash_duration"].as_f64(), Some(3.0));
    assert_eq!(v["log"]["departures"].as_array().map(|a| a.len()), Some(3));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn carwash_seeded_runs_are_reproducible() {
    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_carwash"))
            .args(["--seed", "11", "--until", "100"])
            .output()
            .expect("run carwash");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    assert_eq!(run(), run());
}

#[test]
fn carwash_accepts_wash_as_alias_for_service() {
    let dir = unique_temp_dir("alias");
    let out_json = dir.join("stats.json");
    let output = Command::new(env!("CARGO_BIN_EXE_carwash"))
        .args([
            "--intervals",
            "2,4,1",
            "--until",
            "20",
            "--wash",
            "4",
            "--stats-json",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run carwash");
    assert!(
        output.status.success(),
        "carwash failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let v: Value =
        serde_json::from_str(&fs::read_to_string(&out_json).expect("read stats.json"))
            .expect("parse stats.json");
    assert_eq!(v["config"]["wash_duration"].as_f64(), Some(4.0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn carwash_rejects_non_positive_service_duration() {
    let output = Command::new(env!("CARGO_BIN_EXE_carwash"))
        .args(["--service", "0"])
        .output()
        .expect("run carwash");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wash_duration"), "stderr={stderr}");
}
