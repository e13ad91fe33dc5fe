//! Submodule defining the errors used across the crate.
//!
//! Comment removal, line trimming and splitting never fail; errors only arise
//! once statements are handed to a [`StatementExecutor`](crate::StatementExecutor).

use alloc::string::String;

/// Errors that can occur while executing a script statement by statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError<E> {
    /// The executor rejected a statement; later statements were not run.
    #[error("Statement {index} failed: {source}")]
    Statement {
        /// Zero-based position of the statement in the script.
        index: usize,
        /// The statement text as handed to the executor.
        statement: String,
        /// The error reported by the executor.
        #[source]
        source: E,
    },
}

impl<E> ScriptError<E> {
    /// Zero-based position of the failing statement.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Statement { index, .. } => *index,
        }
    }

    /// The failing statement text.
    #[must_use]
    pub fn statement(&self) -> &str {
        match self {
            Self::Statement { statement, .. } => statement,
        }
    }

    /// Consumes the error and returns the executor's own error.
    #[must_use]
    pub fn into_source(self) -> E {
        match self {
            Self::Statement { source, .. } => source,
        }
    }
}
