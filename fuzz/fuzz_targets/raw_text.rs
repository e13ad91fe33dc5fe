//! Unstructured text fuzzer.
//!
//! Feeds arbitrary UTF-8 through every transformation: none may panic,
//! splitting must keep its structural invariants and trimming must be
//! idempotent.

use honggfuzz::fuzz;
use sqlite_script::testing::{check_split_invariants, check_trim_idempotent};
use sqlite_script::{clean, remove_comments};

fn main() {
    loop {
        fuzz!(|text: &str| {
            let _ = remove_comments(text);
            let _ = clean(text);
            check_split_invariants(text);
            check_trim_idempotent(text);
        });
    }
}
