use crate::models::Record;
use std::error::Error;

/// Decides whether a record is shown to the user.
pub trait ValidityPredicate: Send + Sync {
    fn is_valid(&self, record: &Record) -> bool;
}

impl<F> ValidityPredicate for F
where
    F: Fn(&Record) -> bool + Send + Sync,
{
    fn is_valid(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Keeps every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl ValidityPredicate for AcceptAll {
    fn is_valid(&self, _record: &Record) -> bool {
        true
    }
}

/// Surfaces an aborted dispatch to the user.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &dyn Error, source: &str);
}
