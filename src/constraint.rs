//! Compiled constraint records and expansion errors.
//!
//! A [`ConstraintRecord`] is the fully resolved form of one relationship:
//!
//! ```text
//! element.attribute  <relation>  target.target_attribute * multiplier + constant
//! ```
//!
//! Records are produced by [`expand`](crate::expand) and owned by the host
//! engine once activated. Fixed-value records (`width == 100`) have no
//! target and [`Attribute::NotAnAttribute`] on the right-hand side.

use core::fmt;

use crate::attribute::{Attribute, Priority, Relation};

/// One concrete constraint, ready for the host layout engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintRecord<E> {
    /// The element being constrained.
    pub element: E,
    pub attribute: Attribute,
    pub relation: Relation,
    /// Element on the right-hand side. `None` for fixed-value constraints.
    pub target: Option<E>,
    pub target_attribute: Attribute,
    pub multiplier: f64,
    pub constant: f64,
    /// `None` keeps the host engine's default priority.
    pub priority: Option<Priority>,
}

impl<E> ConstraintRecord<E> {
    /// Whether this compares against a constant only (no target element).
    pub fn is_fixed_value(&self) -> bool {
        self.target.is_none() && !self.target_attribute.is_attribute()
    }
}

impl<E: fmt::Debug> fmt::Display for ConstraintRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}.{} {} ",
            self.element,
            self.attribute,
            self.relation.symbol()
        )?;
        match &self.target {
            Some(target) if self.target_attribute.is_attribute() => {
                write!(f, "{:?}.{}", target, self.target_attribute)?;
                if self.multiplier != 1.0 {
                    write!(f, " * {}", self.multiplier)?;
                }
                if self.constant > 0.0 {
                    write!(f, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(f, " - {}", -self.constant)?;
                }
            }
            _ => write!(f, "{}", self.constant)?,
        }
        if let Some(priority) = self.priority {
            write!(f, " @{}", priority.value())?;
        }
        Ok(())
    }
}

/// Why a list of expressions could not be expanded.
///
/// Both variants are call-site mistakes. No records are produced and
/// nothing is activated when either is returned.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// The element has no container, so there is no frame to measure against.
    #[error("element must be added to a container before applying a layout")]
    MissingContainer,
    /// An expression carries neither a single attribute nor an attribute group.
    #[error("layout expression #{index} must define an attribute")]
    UndefinedAttribute {
        /// Position of the expression in the list passed to expand.
        index: usize,
    },
}
