//! Integration tests for the maqta binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn maqta() -> Command {
    let mut cmd = Command::cargo_bin("maqta").expect("binary builds");
    cmd.env_remove("MAQTA_MODEL_PATH")
        .env_remove("MAQTA_MAX_WORDS_PER_SENTENCE")
        .env_remove("MAQTA_SPLIT_BY_PUNCTUATION")
        .env_remove("MAQTA_MAX_TOTAL_WORDS");
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    maqta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn segment_with_max_policy_needs_no_model() {
    maqta()
        .args(["segment", "--segmenter-type", "max", "--text", "قال. صمت."])
        .assert()
        .success()
        .stdout(predicate::str::contains("قال."))
        .stdout(predicate::str::contains("صمت."));
}

#[test]
fn segment_with_lm_policy_requires_a_model() {
    maqta()
        .args(["segment", "--text", "نص"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--model is required"));
}

#[test]
fn segment_with_a_corpus_file() {
    let mut corpus = NamedTempFile::new().unwrap();
    write!(
        corpus,
        "ذهب الولد الى المدرسة ثم عاد الولد الى البيت مساء"
    )
    .unwrap();

    maqta()
        .args([
            "segment",
            "--model",
            corpus.path().to_str().unwrap(),
            "--text",
            "ذهب الولد الى المدرسة ثم عاد الولد الى البيت مساء وقرأ كتابا",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("الولد"));
}

#[test]
fn json_output_carries_the_utterances_array() {
    maqta()
        .args([
            "segment",
            "--segmenter-type",
            "max",
            "--format",
            "json",
            "--text",
            "قال.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"utterances\""));
}

#[test]
fn validate_accepts_valid_markup() {
    maqta()
        .args(["validate", "--text", "<p><s>Hello</s></p><break/>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_rejects_nested_break_with_the_reason() {
    maqta()
        .args(["validate", "--text", "<p><break/></p>"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("break tag not in outer level"));
}

#[test]
fn markup_segmentation_reports_invalid_markup() {
    maqta()
        .args([
            "segment",
            "--segmenter-type",
            "max",
            "--parse-markup",
            "--text",
            "<s><p>x</p></s>",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("s tags can only contain text"));
}

#[test]
fn environment_overrides_reach_the_engine() {
    maqta()
        .env("MAQTA_MAX_WORDS_PER_SENTENCE", "2")
        .env("MAQTA_MAX_TOTAL_WORDS", "4")
        .args([
            "segment",
            "--segmenter-type",
            "max",
            "--text",
            "واحد اثنان ثلاثة أربعة خمسة ستة",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("واحد اثنان"))
        .stdout(predicate::str::contains("خمسة").not());
}