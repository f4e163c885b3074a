//! Ordered fallback strategies with early exit

use crate::error::Result;
use log::{debug, trace, warn};

/// One strategy: `Ok(Some)` wins, `Ok(None)` defers to the next strategy.
pub type Strategy<'a, I> = Box<dyn Fn(&I) -> Result<Option<String>> + 'a>;

/// Strategies evaluated in insertion order until one produces a value.
/// A strategy that returns an error is logged and skipped.
pub struct Cascade<'a, I: ?Sized> {
    field: &'static str,
    steps: Vec<(&'static str, Strategy<'a, I>)>,
}

impl<'a, I: ?Sized> Cascade<'a, I> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            steps: Vec::new(),
        }
    }

    pub fn then<F>(mut self, name: &'static str, strategy: F) -> Self
    where
        F: Fn(&I) -> Result<Option<String>> + 'a,
    {
        self.steps.push((name, Box::new(strategy)));
        self
    }

    /// Add `strategy` only when `enabled`.
    pub fn then_if<F>(self, enabled: bool, name: &'static str, strategy: F) -> Self
    where
        F: Fn(&I) -> Result<Option<String>> + 'a,
    {
        if enabled {
            self.then(name, strategy)
        } else {
            self
        }
    }

    pub fn run(&self, input: &I) -> Option<String> {
        for (name, strategy) in &self.steps {
            match strategy(input) {
                Ok(Some(value)) => {
                    debug!("{}: matched by '{}'", self.field, name);
                    return Some(value);
                }
                Ok(None) => trace!("{}: '{}' found nothing", self.field, name),
                Err(e) => warn!("{}: '{}' failed, falling through: {}", self.field, name, e),
            }
        }
        debug!("{}: no strategy matched", self.field);
        None
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeParserError;
    use std::cell::Cell;

    #[test]
    fn test_first_success_wins() {
        let calls = Cell::new(0);
        let cascade = Cascade::<str>::new("test")
            .then("none", |_| {
                calls.set(calls.get() + 1);
                Ok(None)
            })
            .then("first", |s| {
                calls.set(calls.get() + 1);
                Ok(Some(format!("first:{}", s)))
            })
            .then("second", |_| {
                calls.set(calls.get() + 1);
                Ok(Some("second".to_string()))
            });

        assert_eq!(cascade.run("x"), Some("first:x".to_string()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_failing_strategy_is_skipped() {
        let cascade = Cascade::<str>::new("test")
            .then("broken", |_| Err(ResumeParserError::Extraction("boom".to_string())))
            .then("fallback", |_| Ok(Some("ok".to_string())));

        assert_eq!(cascade.run(""), Some("ok".to_string()));
    }

    #[test]
    fn test_disabled_strategy_not_added() {
        let cascade = Cascade::<str>::new("test")
            .then_if(false, "disabled", |_| Ok(Some("never".to_string())))
            .then("enabled", |_| Ok(None));

        assert_eq!(cascade.len(), 1);
        assert_eq!(cascade.run(""), None);
    }

    #[test]
    fn test_empty_cascade() {
        let cascade = Cascade::<str>::new("test");
        assert!(cascade.is_empty());
        assert_eq!(cascade.run("anything"), None);
    }
}
