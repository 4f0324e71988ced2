//! # Bounds
//!
//! Per-dimension optional lower/upper clamps for the bounded solver. Bounds
//! are owned by the solver instance and apply to every `solve` call; the
//! clamp is a projection into the allowed interval and is idempotent.

use crate::error::{MemeticError, Result};

/// Per-dimension optional lower and upper bounds over a fixed-dimension
/// real vector.
#[derive(Debug, Clone)]
pub struct Bounds {
    lower: Vec<Option<f64>>,
    upper: Vec<Option<f64>>,
}

impl Bounds {
    /// Creates unbounded constraints for a vector of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            lower: vec![None; dimension],
            upper: vec![None; dimension],
        }
    }

    /// Returns the dimension these bounds apply to.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Enables a lower bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside `[0, dimension)`.
    pub fn set_lower(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.lower[index] = Some(value);
        Ok(())
    }

    /// Enables an upper bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside `[0, dimension)`.
    pub fn set_upper(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.upper[index] = Some(value);
        Ok(())
    }

    /// Removes the lower bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside `[0, dimension)`.
    pub fn clear_lower(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.lower[index] = None;
        Ok(())
    }

    /// Removes the upper bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside `[0, dimension)`.
    pub fn clear_upper(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.upper[index] = None;
        Ok(())
    }

    /// Projects `x` into the bounded region, coordinate by coordinate.
    ///
    /// `x` must have the bounds' dimension; extra or missing coordinates are
    /// the caller's bug and are caught by the solver before clamping.
    pub fn clamp(&self, x: &mut [f64]) {
        for (i, value) in x.iter_mut().enumerate() {
            if let Some(lower) = self.lower[i] {
                if *value < lower {
                    *value = lower;
                }
            }
            if let Some(upper) = self.upper[i] {
                if *value > upper {
                    *value = upper;
                }
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.dimension() {
            return Err(MemeticError::Configuration(format!(
                "bound index {} out of range for dimension {}",
                index,
                self.dimension()
            )));
        }
        Ok(())
    }
}
