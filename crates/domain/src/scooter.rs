use crate::error::{DomainError, Result};
use crate::pagination::{Page, paginate};

/// The static scooter catalog: a contiguous, ascending range of numbers.
///
/// Nothing about scooters is persisted; the catalog is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScooterFleet {
    first: i64,
    last: i64,
}

impl ScooterFleet {
    pub const DEFAULT_FIRST: i64 = 101;
    pub const DEFAULT_LAST: i64 = 230;

    pub fn new(first: i64, last: i64) -> Result<Self> {
        if first > last {
            return Err(DomainError::InvalidFleet(format!(
                "first scooter {first} is greater than last scooter {last}"
            )));
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn contains(&self, number: i64) -> bool {
        (self.first..=self.last).contains(&number)
    }

    /// Validate a user-supplied number against the range
    pub fn check(&self, number: i64) -> Result<i64> {
        if self.contains(number) {
            Ok(number)
        } else {
            Err(DomainError::ScooterOutOfRange {
                number,
                first: self.first,
                last: self.last,
            })
        }
    }

    pub fn numbers(&self) -> Vec<i64> {
        (self.first..=self.last).collect()
    }

    pub fn page(&self, requested: i64, per_page: usize) -> Page<i64> {
        paginate(&self.numbers(), requested, per_page)
    }
}

impl Default for ScooterFleet {
    fn default() -> Self {
        Self {
            first: Self::DEFAULT_FIRST,
            last: Self::DEFAULT_LAST,
        }
    }
}
