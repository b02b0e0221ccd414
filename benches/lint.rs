use std::fs;

use divan::{Bencher, black_box};
use trojanlint::{
    bidi::BidiMap,
    lint::{lint_file, lint_text},
    profile::Profile,
    tokenizer::python::PythonTokenizer,
};

const FILES: &[&str] = &["test-data/clean.py", "test-data/trojan.py"];

fn main() {
    divan::main();
}

#[divan::bench(args = FILES)]
fn lint_only(bencher: Bencher, path: &str) {
    let source = fs::read_to_string(path).unwrap();
    let profile = Profile::python();
    bencher.bench_local(move || {
        black_box(lint_text("bench", &source, &PythonTokenizer, &profile).ok());
    });
}

#[divan::bench(args = FILES)]
fn lint_e2e(bencher: Bencher, path: &str) {
    let profile = Profile::python();
    bencher.bench_local(move || {
        black_box(lint_file(&PythonTokenizer, &profile, path, false).ok());
    });
}

#[divan::bench]
fn bidi_maps(bencher: Bencher) {
    let source = fs::read_to_string("test-data/trojan.py").unwrap();
    bencher.bench_local(move || {
        black_box(BidiMap::build(&source));
    });
}
