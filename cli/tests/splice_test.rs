//! Integration tests for the `splice` command.

mod common;

use common::{check_stdout, growvec};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn splice_default_resize() {
    check_stdout(
        &["splice"],
        expect![[r#"
            capacity: 20, size: 15, free: 5
            [10, 10, 10, 10, 10, 1, 2, 3, 4, 5, 11, 11, 11, 11, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
            capacity: 31, size: 31, free: 0
        "#]],
    );
}

#[test]
fn splice_resize_keeps_prefix() {
    check_stdout(
        &["splice", "--resize", "7"],
        expect![[r#"
            capacity: 20, size: 15, free: 5
            [10, 10, 10, 10, 10, 1, 2]
            capacity: 7, size: 7, free: 0
        "#]],
    );
}

#[test]
fn splice_on_arena() {
    growvec()
        .args(["splice", "--arena"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity: 31, size: 31, free: 0"));
}

#[test]
fn help_lists_commands() {
    growvec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("grow").and(predicate::str::contains("splice")));
}
