//! Running split statements against a database, one statement at a time.
//!
//! The crate never talks to a database itself: anything able to prepare and
//! run a single statement implements [`StatementExecutor`]. With the
//! `rusqlite` feature, `rusqlite::Connection` is one.

use alloc::string::ToString;

use crate::errors::ScriptError;
use crate::script::Splitter;

/// Something that can run a single SQL statement to completion.
pub trait StatementExecutor {
    /// The error reported when a statement fails.
    type Error;

    /// Prepares `statement` and steps it until it yields no more rows.
    ///
    /// # Errors
    ///
    /// Returns the executor's error if the statement cannot be prepared or
    /// fails while stepping.
    fn execute_statement(&mut self, statement: &str) -> Result<(), Self::Error>;
}

impl<X: StatementExecutor + ?Sized> StatementExecutor for &mut X {
    type Error = X::Error;

    fn execute_statement(&mut self, statement: &str) -> Result<(), Self::Error> {
        (**self).execute_statement(statement)
    }
}

/// Executor backed by a closure, created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnExecutor<F>(F);

impl<F, E> StatementExecutor for FnExecutor<F>
where
    F: FnMut(&str) -> Result<(), E>,
{
    type Error = E;

    fn execute_statement(&mut self, statement: &str) -> Result<(), E> {
        (self.0)(statement)
    }
}

/// Wraps a closure into a [`StatementExecutor`].
///
/// # Examples
///
/// ```
/// use sqlite_script::{execute_script, executor::from_fn};
///
/// let mut seen = Vec::new();
/// let mut executor = from_fn(|statement: &str| {
///     seen.push(statement.to_owned());
///     Ok::<(), ()>(())
/// });
/// assert_eq!(execute_script(&mut executor, "SELECT 1;\nSELECT 2;"), Ok(2));
/// drop(executor);
/// assert_eq!(seen, ["SELECT 1", "SELECT 2"]);
/// ```
#[must_use]
pub fn from_fn<F, E>(f: F) -> FnExecutor<F>
where
    F: FnMut(&str) -> Result<(), E>,
{
    FnExecutor(f)
}

#[cfg(feature = "rusqlite")]
impl StatementExecutor for rusqlite::Connection {
    type Error = rusqlite::Error;

    /// Statements holding nothing but comments prepare to no statement at all
    /// and are skipped.
    fn execute_statement(&mut self, statement: &str) -> Result<(), rusqlite::Error> {
        if crate::script::remove_comments(statement).trim().is_empty() {
            log::trace!("skipping comment-only statement: {statement}");
            return Ok(());
        }
        let mut prepared = self.prepare(statement)?;
        let mut rows = prepared.raw_query();
        while rows.next()?.is_some() {}
        Ok(())
    }
}

/// Runs `statements` in order, stopping at the first failure.
pub(crate) fn execute_statements<'a, X, I>(
    executor: &mut X,
    statements: I,
) -> Result<usize, ScriptError<X::Error>>
where
    X: StatementExecutor + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut executed = 0;
    for (index, statement) in statements.into_iter().enumerate() {
        log::debug!("executing statement {index}: {statement}");
        if let Err(source) = executor.execute_statement(statement) {
            log::warn!("statement {index} failed, {executed} statements were executed");
            return Err(ScriptError::Statement {
                index,
                statement: statement.to_string(),
                source,
            });
        }
        executed += 1;
    }
    Ok(executed)
}

/// Splits `script` with the default [`Splitter`] and executes its statements
/// in order.
///
/// Returns the number of statements executed.
///
/// # Errors
///
/// Stops at the first statement the executor rejects and returns it as
/// [`ScriptError::Statement`]; statements before it stay applied.
pub fn execute_script<X: StatementExecutor>(
    executor: &mut X,
    script: &str,
) -> Result<usize, ScriptError<X::Error>> {
    Splitter::new().execute(executor, script)
}
