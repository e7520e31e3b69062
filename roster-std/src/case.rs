//! Exhaustive case dispatch.
//!
//! A [`Cases`] mapping pairs value groups with handlers and may carry a
//! default handler. Dispatching a value against a registry:
//!
//! 1. validates the mapping against the registry's full value set, before any
//!    handler runs:
//!    - values outside the enumeration fail with `ValuesNotDefined`, whether
//!      or not a default exists;
//!    - uncovered members fail with `NotAllCasesHandled` unless a default
//!      exists;
//! 2. selects every group containing the value, in mapping order;
//! 3. runs the default when nothing is selected, the single handler when one
//!    group is selected, and every selected handler when several are.
//!
//! Overlapping groups are legal and yield [`CaseResult::Many`].

use crate::registry::Registry;
use indexmap::IndexSet;
use roster_core::{
    CaseError, CaseHandler, IntoCaseHandler, Key, NotAllCasesHandledError, Value,
    ValuesNotDefinedError,
};
use std::{slice, vec};

/// The set of values a case arm responds to.
///
/// A single value behaves as a one-element set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueGroup {
    /// Exactly one value.
    One(Value),
    /// Any of several values.
    Many(Vec<Value>),
}

impl ValueGroup {
    /// The values in this group.
    pub fn values(&self) -> &[Value] {
        match self {
            ValueGroup::One(value) => slice::from_ref(value),
            ValueGroup::Many(values) => values,
        }
    }

    /// Check if `value` belongs to this group.
    pub fn contains(&self, value: &Value) -> bool {
        self.values().contains(value)
    }
}

impl From<Value> for ValueGroup {
    fn from(value: Value) -> Self {
        ValueGroup::One(value)
    }
}

impl From<&Value> for ValueGroup {
    fn from(value: &Value) -> Self {
        ValueGroup::One(value.clone())
    }
}

impl From<Key> for ValueGroup {
    fn from(key: Key) -> Self {
        ValueGroup::One(Value::Symbol(key))
    }
}

impl From<&'static str> for ValueGroup {
    fn from(s: &'static str) -> Self {
        ValueGroup::One(Value::from(s))
    }
}

impl From<i64> for ValueGroup {
    fn from(i: i64) -> Self {
        ValueGroup::One(Value::Int(i))
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for ValueGroup {
    fn from(values: [V; N]) -> Self {
        ValueGroup::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Vec<V>> for ValueGroup {
    fn from(values: Vec<V>) -> Self {
        ValueGroup::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[Value]> for ValueGroup {
    fn from(values: &[Value]) -> Self {
        ValueGroup::Many(values.to_vec())
    }
}

/// The outcome of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult<T> {
    /// Nothing matched and no default was given. Only possible when the
    /// dispatched value is not a member.
    Empty,
    /// One handler ran: the single selected arm or the default.
    One(T),
    /// Several arms matched; their results in mapping order.
    Many(Vec<T>),
}

impl<T> CaseResult<T> {
    /// Check if no handler ran.
    pub fn is_empty(&self) -> bool {
        matches!(self, CaseResult::Empty)
    }

    /// Number of handler results.
    pub fn len(&self) -> usize {
        match self {
            CaseResult::Empty => 0,
            CaseResult::One(_) => 1,
            CaseResult::Many(results) => results.len(),
        }
    }

    /// The result if exactly one handler ran.
    pub fn one(self) -> Option<T> {
        match self {
            CaseResult::One(result) => Some(result),
            _ => None,
        }
    }

    /// All results as a vector, whatever the shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            CaseResult::Empty => Vec::new(),
            CaseResult::One(result) => vec![result],
            CaseResult::Many(results) => results,
        }
    }

    /// Transform every result.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CaseResult<U> {
        match self {
            CaseResult::Empty => CaseResult::Empty,
            CaseResult::One(result) => CaseResult::One(f(result)),
            CaseResult::Many(results) => CaseResult::Many(results.into_iter().map(f).collect()),
        }
    }
}

impl<T> IntoIterator for CaseResult<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// A case mapping: ordered value groups with handlers, plus an optional
/// default.
///
/// Built fresh for each dispatch; it borrows nothing from the registry.
///
/// # Example
///
/// ```rust,ignore
/// let cases = Cases::new()
///     .when([Colors::RED, Colors::GREEN], |color: &Value| format!("is {color}"))
///     .when(Colors::BLUE, || "blue".to_string());
///
/// let result = Colors::case(&Colors::RED, &cases)?;
/// assert_eq!(result, CaseResult::One("is red".to_string()));
/// ```
#[derive(Debug)]
pub struct Cases<'a, T> {
    arms: Vec<(ValueGroup, CaseHandler<'a, T>)>,
    otherwise: Option<CaseHandler<'a, T>>,
}

impl<T> Default for Cases<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Cases<'a, T> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            otherwise: None,
        }
    }

    /// Add an arm for `group`.
    pub fn when<G, H, A>(mut self, group: G, handler: H) -> Self
    where
        G: Into<ValueGroup>,
        H: IntoCaseHandler<'a, T, A>,
    {
        self.arms.push((group.into(), handler.into_case_handler()));
        self
    }

    /// Set the default handler, run when no arm matches.
    pub fn otherwise<H, A>(mut self, handler: H) -> Self
    where
        H: IntoCaseHandler<'a, T, A>,
    {
        self.otherwise = Some(handler.into_case_handler());
        self
    }

    /// Check if a default handler is set.
    pub fn has_default(&self) -> bool {
        self.otherwise.is_some()
    }

    /// Number of arms, not counting the default.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if there are no arms.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Every value named by an arm, in mapping order, without repeats.
    pub fn declared_values(&self) -> IndexSet<&Value> {
        self.arms
            .iter()
            .flat_map(|(group, _)| group.values())
            .collect()
    }

    /// Handlers of the arms whose group contains `value`, in mapping order.
    fn selected<'s>(
        &'s self,
        value: &'s Value,
    ) -> impl Iterator<Item = &'s CaseHandler<'a, T>> {
        self.arms
            .iter()
            .filter(move |(group, _)| group.contains(value))
            .map(|(_, handler)| handler)
    }
}

impl Registry {
    /// Check `cases` against the effective value set without running any
    /// handler.
    pub fn validate_cases<T>(&self, cases: &Cases<'_, T>) -> Result<(), CaseError> {
        let all: IndexSet<&Value> = self.iter_values().collect();
        let declared = cases.declared_values();

        let superfluous: Vec<Value> = declared.difference(&all).map(|v| (*v).clone()).collect();
        if !superfluous.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                registry = %self.name(),
                ?superfluous,
                "case mapping names undefined values"
            );
            return Err(ValuesNotDefinedError {
                name: self.name().to_string(),
                values: superfluous,
            }
            .into());
        }

        if !cases.has_default() {
            let missing: Vec<Value> = all.difference(&declared).map(|v| (*v).clone()).collect();
            if !missing.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    registry = %self.name(),
                    ?missing,
                    "case mapping is not exhaustive"
                );
                return Err(NotAllCasesHandledError {
                    name: self.name().to_string(),
                    values: missing,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Dispatch `input` against `cases`.
    ///
    /// Validation happens first; on failure no handler runs.
    pub fn dispatch<T>(
        &self,
        input: &Value,
        cases: &Cases<'_, T>,
    ) -> Result<CaseResult<T>, CaseError> {
        self.validate_cases(cases)?;

        let selected: Vec<&CaseHandler<'_, T>> = cases.selected(input).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            registry = %self.name(),
            input = %input,
            matched = selected.len(),
            "dispatching case"
        );

        Ok(match selected.as_slice() {
            [] => match &cases.otherwise {
                Some(handler) => CaseResult::One(handler.invoke(input)),
                None => CaseResult::Empty,
            },
            [handler] => CaseResult::One(handler.invoke(input)),
            handlers => CaseResult::Many(handlers.iter().map(|h| h.invoke(input)).collect()),
        })
    }

    /// Dispatch with fallible handlers.
    ///
    /// Handlers run in mapping order; the first `Err` is returned as-is and
    /// the remaining handlers do not run. Validation errors are converted
    /// into `E`.
    pub fn try_dispatch<U, E>(
        &self,
        input: &Value,
        cases: &Cases<'_, Result<U, E>>,
    ) -> Result<CaseResult<U>, E>
    where
        E: From<CaseError>,
    {
        self.validate_cases(cases)?;

        let selected: Vec<&CaseHandler<'_, Result<U, E>>> = cases.selected(input).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            registry = %self.name(),
            input = %input,
            matched = selected.len(),
            "dispatching fallible case"
        );

        Ok(match selected.as_slice() {
            [] => match &cases.otherwise {
                Some(handler) => CaseResult::One(handler.invoke(input)?),
                None => CaseResult::Empty,
            },
            [handler] => CaseResult::One(handler.invoke(input)?),
            handlers => CaseResult::Many(
                handlers
                    .iter()
                    .map(|h| h.invoke(input))
                    .collect::<Result<Vec<U>, E>>()?,
            ),
        })
    }
}
