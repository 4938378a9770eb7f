//! Integration tests for the `grow` command.

mod common;

use common::{check_stderr, check_stdout, growvec};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn grow_small_count() {
    check_stdout(
        &["grow", "--count", "5"],
        expect![[r#"
            capacity: 0, size: 0, free: 0
            capacity: 1, size: 1, free: 0
            capacity: 2, size: 2, free: 0
            capacity: 4, size: 3, free: 1
            capacity: 4, size: 4, free: 0
            capacity: 8, size: 5, free: 3
        "#]],
    );
}

#[test]
fn grow_default_count_ends_at_128() {
    growvec()
        .arg("grow")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "capacity: 128, size: 99, free: 29\ncapacity: 128, size: 100, free: 28\n",
        ));
}

#[test]
fn grow_zero_count() {
    growvec()
        .args(["grow", "--count", "0"])
        .assert()
        .success()
        .stdout("capacity: 0, size: 0, free: 0\n");
}

#[test]
fn grow_reads_index() {
    growvec()
        .args(["grow", "--count", "10", "--at", "7"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("at(7) = 7\n"));
}

#[test]
fn grow_out_of_range_index_fails() {
    growvec()
        .args(["grow", "--count", "3", "--at", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "index 3 is out of range for length 3",
        ));
}

#[test]
fn grow_error_without_color() {
    check_stderr(
        &["--no-color", "grow", "--count", "0", "--at", "0"],
        expect![[r#"
            error: index 0 is out of range for length 0
        "#]],
    );
}

#[test]
fn grow_on_arena_prints_the_same() {
    let heap = growvec()
        .args(["grow", "--count", "40"])
        .output()
        .unwrap();
    let arena = growvec()
        .args(["grow", "--count", "40", "--arena"])
        .output()
        .unwrap();
    assert!(heap.status.success());
    assert_eq!(heap.stdout, arena.stdout);
}

#[test]
fn grow_rejects_bad_count() {
    growvec()
        .args(["grow", "--count", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
