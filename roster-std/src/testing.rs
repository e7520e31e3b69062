//! Testing utilities for Roster.
//!
//! - [`RecordingTranslator`]: A translator that records every render request
//! - [`CallCounter`]: Counts handler invocations, e.g. to check that nothing
//!   ran after a validation failure

use roster_core::{EnglishTranslator, MessageKey, MessageParams, Translator, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Translator
// ============================================================================

/// A translator that records the key and parameters of every render and
/// delegates the text to an inner translator (English by default).
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingTranslator::new();
/// err.render(&recorder);
///
/// assert_eq!(recorder.keys(), vec![MessageKey::DuplicateKey]);
/// ```
pub struct RecordingTranslator<T = EnglishTranslator> {
    calls: Arc<Mutex<Vec<(MessageKey, MessageParams)>>>,
    inner: T,
}

impl RecordingTranslator {
    /// Create a recorder rendering English text.
    pub fn new() -> Self {
        Self::wrapping(EnglishTranslator)
    }
}

impl<T> RecordingTranslator<T> {
    /// Create a recorder around another translator.
    pub fn wrapping(inner: T) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            inner,
        }
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<(MessageKey, MessageParams)> {
        self.calls.lock().unwrap().clone()
    }

    /// The recorded message keys.
    pub fn keys(&self) -> Vec<MessageKey> {
        self.calls.lock().unwrap().iter().map(|(key, _)| *key).collect()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for RecordingTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RecordingTranslator<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: Translator> Translator for RecordingTranslator<T> {
    fn render(&self, key: MessageKey, params: &MessageParams) -> String {
        self.calls.lock().unwrap().push((key, params.clone()));
        self.inner.render(key, params)
    }
}

// ============================================================================
// Call Counter
// ============================================================================

/// Counts invocations of the handlers it hands out.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CallCounter::new();
/// let cases = Cases::new().when(Colors::RED, counter.nullary("red"));
///
/// Colors::case(&Colors::RED, &cases)?;
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A nullary handler that counts and returns a clone of `output`.
    pub fn nullary<T: Clone>(&self, output: T) -> impl Fn() -> T + use<T> {
        let count = self.count.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            output.clone()
        }
    }

    /// A unary handler that counts and returns the value it was given.
    pub fn echo(&self) -> impl Fn(&Value) -> Value + use<> {
        let count = self.count.clone();
        move |value: &Value| {
            count.fetch_add(1, Ordering::SeqCst);
            value.clone()
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::{CallCounter, RecordingTranslator};
    use roster_core::{MessageKey, MessageKeyTranslator, MessageParams, Translator, Value};

    #[test]
    fn recording_translator_delegates_and_records() {
        let recorder = RecordingTranslator::wrapping(MessageKeyTranslator);
        let params = MessageParams::new().with("value", "red");

        let text = recorder.render(MessageKey::DuplicateValue, &params);

        assert_eq!(text, "roster.errors.messages.duplicate_value.summary");
        assert_eq!(recorder.keys(), vec![MessageKey::DuplicateValue]);
        assert_eq!(recorder.calls()[0].1, params);
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn call_counter_counts_both_shapes() {
        let counter = CallCounter::new();
        let nullary = counter.nullary("red");
        let echo = counter.echo();

        assert_eq!(nullary(), "red");
        assert_eq!(echo(&Value::symbol("blue")), Value::symbol("blue"));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn call_counter_reset_starts_over() {
        let counter = CallCounter::new();
        let nullary = counter.nullary(());
        nullary();
        nullary();
        assert_eq!(counter.count(), 2);

        counter.reset();
        assert_eq!(counter.count(), 0);
        nullary();
        assert_eq!(counter.count(), 1);
    }
}
