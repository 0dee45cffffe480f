// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const DICTIONARY: &str = "hello\nworld\nthe\nquick\nbrown\nfox\n";

fn cli_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spellchecker"));
    cmd.env_remove("SPELLCHECKER_BLOOM_FILTER")
        .env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path.to_str().unwrap().to_string()
}

#[test]
fn build_then_check() {
    let tmp = tempdir().expect("tempdir");
    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    let document = write_file(tmp.path(), "document.txt", "Hello wrld, the quick fox!\nworl wrld\n");
    let filter = tmp.path().join("words.bf");
    let filter = filter.to_str().unwrap();

    cli_cmd()
        .args(["--build", &dictionary, "--bloom-filter", filter])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Bloom filter created successfully and saved to: {filter}"
        )));

    // 4792529 bits in 599067 bytes after the 12 byte header
    assert_eq!(fs::metadata(filter).unwrap().len(), 599_079);

    cli_cmd()
        .args(["--check", &document, "--bloom-filter", filter])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Found 2 spelling errors in {document}: worl, wrld"
        )));
}

#[test]
fn build_and_check_in_one_invocation() {
    let tmp = tempdir().expect("tempdir");
    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    let document = write_file(tmp.path(), "document.txt", "the brwn fox\n");

    cli_cmd()
        .current_dir(tmp.path())
        .args([
            "--build",
            &dictionary,
            "--expected-insertions",
            "100",
            "--epsilon",
            "0.01",
            "--check",
            &document,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bloom filter created successfully and saved to: words.bf",
        ))
        .stdout(predicate::str::contains(format!(
            "Found 1 spelling errors in {document}: brwn"
        )));

    // 958 bits round up to 120 bytes
    assert_eq!(fs::metadata(tmp.path().join("words.bf")).unwrap().len(), 132);
}

#[test]
fn clean_document_reports_no_errors() {
    let tmp = tempdir().expect("tempdir");
    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    let document = write_file(tmp.path(), "document.txt", "The QUICK brown fox.\n");
    let filter = tmp.path().join("words.bf");
    let filter = filter.to_str().unwrap();

    cli_cmd()
        .args(["--build", &dictionary, "--bloom-filter", filter])
        .args(["--expected-insertions", "100", "--check", &document])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Found 0 spelling errors in {document}: \n"
        )));
}

#[test]
fn bloom_filter_path_from_env() {
    let tmp = tempdir().expect("tempdir");
    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    let document = write_file(tmp.path(), "document.txt", "helo world\n");
    let filter = tmp.path().join("from-env.bf");

    cli_cmd()
        .env("SPELLCHECKER_BLOOM_FILTER", &filter)
        .args(["--build", &dictionary, "--expected-insertions", "100"])
        .assert()
        .success();
    assert!(filter.exists());

    cli_cmd()
        .env("SPELLCHECKER_BLOOM_FILTER", &filter)
        .args(["--check", &document])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 spelling errors"))
        .stdout(predicate::str::ends_with(": helo\n"));
}

#[test]
fn nothing_to_do() {
    cli_cmd()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to do"));
}

#[test]
fn help_and_version_succeed() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bloom-filter"))
        .stdout(predicate::str::contains("SPELLCHECKER_BLOOM_FILTER"));

    cli_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("spellchecker "));
}

#[test]
fn parse_errors_exit_1() {
    cli_cmd()
        .args(["--epsilon", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--epsilon"));

    cli_cmd().arg("--no-such-flag").assert().code(1);

    cli_cmd()
        .args(["--expected-insertions", "-5"])
        .assert()
        .code(1);
}

#[test]
fn io_errors_exit_2() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("missing.txt");
    let missing = missing.to_str().unwrap();
    let filter = tmp.path().join("words.bf");
    let filter = filter.to_str().unwrap();

    cli_cmd()
        .args(["--build", missing, "--bloom-filter", filter])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("I/O error: cannot open dictionary"));

    cli_cmd()
        .args(["--check", missing, "--bloom-filter", filter])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open bloom filter file"));

    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    cli_cmd()
        .args(["--build", &dictionary, "--bloom-filter", filter])
        .args(["--expected-insertions", "100"])
        .assert()
        .success();
    cli_cmd()
        .args(["--check", missing, "--bloom-filter", filter])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open document"));
}

#[test]
fn other_errors_exit_3() {
    let tmp = tempdir().expect("tempdir");
    let dictionary = write_file(tmp.path(), "dictionary.txt", DICTIONARY);
    let document = write_file(tmp.path(), "document.txt", "hello\n");
    let filter = tmp.path().join("words.bf");
    let filter = filter.to_str().unwrap();

    cli_cmd()
        .args(["--build", &dictionary, "--bloom-filter", filter])
        .args(["--epsilon", "1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Unexpected error: InvalidParameter",
        ))
        .stderr(predicate::str::contains(
            "epsilon must be greater than 0 and less than 1",
        ));
    assert!(!Path::new(filter).exists());

    let bogus = write_file(tmp.path(), "bogus.bf", "this is not a filter");
    cli_cmd()
        .args(["--check", &document, "--bloom-filter", &bogus])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a bloom filter"));

    fs::write(filter, b"CCBF\x00\x02\x00\x01\x00\x00\x00\x08\xff").unwrap();
    cli_cmd()
        .args(["--check", &document, "--bloom-filter", filter])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported version: 2"));
}
