//! Operation counting for weights.
//!
//! [`Counted`] wraps any [`Weight`] and reports additions, equality tests and
//! ordering comparisons to an [`OpCounts`] observer that the caller owns and
//! passes in explicitly. Nothing here is global: two searches can be measured
//! side by side with two observers.
//!
//! Values produced by [`Zero::zero`], [`Weight::infinity`] and
//! [`Weight::from_f64`] carry no observer; an operation is recorded when
//! either operand has one, and sums inherit it.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use num_traits::Zero;
use serde::Serialize;

use crate::weight::Weight;

/// Counters shared by every [`Counted`] value created through [`OpCounts::wrap`].
#[derive(Debug, Default)]
pub struct OpCounts {
    constructions: Cell<u64>,
    additions: Cell<u64>,
    equalities: Cell<u64>,
    comparisons: Cell<u64>,
}

/// A point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpSnapshot {
    pub constructions: u64,
    pub additions: u64,
    pub equalities: u64,
    pub comparisons: u64,
}

impl OpCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that operations on it are recorded here.
    pub fn wrap<W: Weight>(&self, value: W) -> Counted<'_, W> {
        bump(&self.constructions);
        Counted {
            value,
            counts: Some(self),
        }
    }

    pub fn snapshot(&self) -> OpSnapshot {
        OpSnapshot {
            constructions: self.constructions.get(),
            additions: self.additions.get(),
            equalities: self.equalities.get(),
            comparisons: self.comparisons.get(),
        }
    }

    pub fn clear(&self) {
        self.constructions.set(0);
        self.additions.set(0);
        self.equalities.set(0);
        self.comparisons.set(0);
    }
}

fn bump(cell: &Cell<u64>) {
    cell.set(cell.get() + 1);
}

/// A weight decorated with an optional operation observer.
#[derive(Clone, Copy)]
pub struct Counted<'a, W> {
    value: W,
    counts: Option<&'a OpCounts>,
}

impl<'a, W: Weight> Counted<'a, W> {
    /// Wraps a value without attaching an observer.
    pub fn detached(value: W) -> Self {
        Counted { value, counts: None }
    }

    pub fn get(&self) -> W {
        self.value
    }

    fn observer(&self, other: &Self) -> Option<&'a OpCounts> {
        self.counts.or(other.counts)
    }
}

impl<W: fmt::Debug> fmt::Debug for Counted<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<W: Weight> PartialEq for Counted<'_, W> {
    fn eq(&self, other: &Self) -> bool {
        if let Some(counts) = self.observer(other) {
            bump(&counts.equalities);
        }
        self.value == other.value
    }
}

impl<W: Weight> Eq for Counted<'_, W> {}

impl<W: Weight> PartialOrd for Counted<'_, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Counted<'_, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        if let Some(counts) = self.observer(other) {
            bump(&counts.comparisons);
        }
        self.value.cmp(&other.value)
    }
}

impl<'a, W: Weight> Add for Counted<'a, W> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let counts = self.observer(&other);
        if let Some(counts) = counts {
            bump(&counts.additions);
        }
        Counted {
            value: self.value + other.value,
            counts,
        }
    }
}

impl<W: Weight> Zero for Counted<'_, W> {
    fn zero() -> Self {
        Counted::detached(W::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<W: Weight> Weight for Counted<'_, W> {
    fn infinity() -> Self {
        Counted::detached(W::infinity())
    }

    fn from_f64(value: f64) -> Self {
        Counted::detached(W::from_f64(value))
    }

    fn try_add(self, other: Self) -> Option<Self> {
        let counts = self.observer(&other);
        if let Some(counts) = counts {
            bump(&counts.additions);
        }
        self.value
            .try_add(other.value)
            .map(|value| Counted { value, counts })
    }
}
