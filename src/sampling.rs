// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Evenly spaced sampling grids for the batch series.

use crate::error::{CalendarError, Result};

/// A closed, evenly spaced grid of `count` points from `start` to `end`.
///
/// The unit is up to the consumer: decimal years for
/// [`delta_t_series`](crate::delta_t_series), Julian centuries since J2000
/// for [`obliquity_series`](crate::obliquity_series).
///
/// # Example
///
/// ```
/// use fasti::SampleGrid;
///
/// let grid = SampleGrid::new(1900.0, 2000.0, 5).unwrap();
/// let points: Vec<f64> = grid.points().collect();
/// assert_eq!(points, vec![1900.0, 1925.0, 1950.0, 1975.0, 2000.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    count: usize,
}

impl SampleGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidSampling`] if either bound or the span
    /// between them is non-finite, `start >= end`, or `count < 2`.
    pub fn new(start: f64, end: f64, count: usize) -> Result<Self> {
        let grid = Self { start, end, count };
        grid.validate()?;
        Ok(grid)
    }

    /// Returns the first point.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the last point.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the number of points.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between consecutive points.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.count - 1) as f64
    }

    /// The grid points in increasing order.  The last point is exactly
    /// `end`, free of accumulated rounding.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let step = self.step();
        (0..self.count).map(move |i| {
            if i + 1 == self.count {
                self.end
            } else {
                self.start + step * i as f64
            }
        })
    }

    fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(CalendarError::InvalidSampling {
                reason: "bounds must be finite",
            });
        }
        if !(self.end - self.start).is_finite() {
            return Err(CalendarError::InvalidSampling {
                reason: "span must be finite",
            });
        }
        if self.start >= self.end {
            return Err(CalendarError::InvalidSampling {
                reason: "start must be before end",
            });
        }
        if self.count < 2 {
            return Err(CalendarError::InvalidSampling {
                reason: "at least two points are required",
            });
        }
        Ok(())
    }
}
