// crates/nocomma-cli/tests/stdio_filter.rs

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nocomma"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn nocomma");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");

    child.wait_with_output().expect("wait nocomma")
}

fn assert_ok(out: &Output) {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn filters_stdin_to_stdout() {
    let out = run_with_stdin(&[], b"cat,dog\t1990,5,2\n");
    assert_ok(&out);
    assert_eq!(out.stdout, b"cat,dog\t1990 5 2\n");
}

#[test]
fn unchanged_inputs_pass_through() {
    for input in [&b"a\tb\n"[..], &b"x,y\tz\nw,v\tu\n"[..], &b"a,b,c\n"[..]] {
        let out = run_with_stdin(&[], input);
        assert_ok(&out);
        assert_eq!(out.stdout, input);
    }
}

#[test]
fn empty_stdin_exits_zero_with_no_output() {
    let out = run_with_stdin(&[], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn nothing_but_data_on_stdout() {
    let input = b"w,x\t2000,1,2\t2001,3,4\n";
    let out = run_with_stdin(&["--stats"], input);
    assert_ok(&out);
    assert_eq!(out.stdout, b"w,x\t2000 1 2\t2001 3 4\n");

    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("BYTES=22"), "{err}");
    assert!(err.contains("COMMAS_REWRITTEN=4"), "{err}");
    assert!(err.contains("COMMAS_KEPT=1"), "{err}");
}

#[test]
fn tiny_buffer_gives_same_output() {
    let input = b"a,b\t1,2,3\n,c\t4,5\nno tab, here\n";
    let out = run_with_stdin(&["--buf-bytes", "1"], input);
    assert_ok(&out);
    assert_eq!(out.stdout, b"a,b\t1 2 3\n,c\t4 5\nno tab, here\n");
}

#[test]
fn zero_buffer_is_rejected() {
    let out = run_with_stdin(&["--buf-bytes", "0"], b"a\t1,2\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("buf_bytes"));
}

#[test]
fn output_is_stable_across_runs() {
    let input = b"hello,world\t2019,10,3\t2020,12,4\n\xFF,\t9,9\n";
    let a = run_with_stdin(&[], input);
    let b = run_with_stdin(&[], &a.stdout);
    assert_ok(&a);
    assert_ok(&b);
    assert_eq!(a.stdout, b.stdout);
}
