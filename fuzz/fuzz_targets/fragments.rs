//! Structured script fuzzer.
//!
//! Generates scripts from arbitrary fragments (words, literals, comments,
//! `BEGIN`/`END`, terminators) and checks comment removal, literal
//! preservation, splitting and trimming invariants on each.

use honggfuzz::fuzz;
use sqlite_script::testing::{ScriptFragment, check_script};

fn main() {
    loop {
        fuzz!(|fragments: Vec<ScriptFragment>| {
            check_script(&fragments);
        });
    }
}
