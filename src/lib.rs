#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;
#[cfg(feature = "testing")]
extern crate std;

pub mod errors;
pub mod executor;
pub mod script;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use executor::{StatementExecutor, execute_script};
pub use script::{
    KeywordMatching, Splitter, Statements, clean, remove_comments, split_statements, trim_lines,
};

// Re-export errors
pub use errors::ScriptError;
