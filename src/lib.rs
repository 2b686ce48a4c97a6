//! Declarative layout constraints, compiled for a host layout engine.
//!
//! Describe relationships between elements with [`LayoutExpression`]
//! ("my top equals your bottom plus 8, at priority 750"), then expand them
//! into [`ConstraintRecord`]s that the host engine activates. No solving
//! happens here.
//!
//! # Modules
//!
//! - [`expression`] — The expression builder: named constructors and composition steps
//! - [`compile`] — Expansion into records, and activation through a [`ConstraintSink`]
//! - [`constraint`] — Constraint records and expansion errors
//! - [`element`] — Host seams: [`Element`] and [`ConstraintSink`]
//! - [`attribute`] — Attribute, relation, and priority tokens
//!
//! # Example
//!
//! ```
//! use zenanchor::{Attribute, Element, LayoutExpression as L, expand};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct View {
//!     id: u32,
//!     parent: Option<u32>,
//! }
//!
//! impl Element for View {
//!     fn container(&self) -> Option<Self> {
//!         self.parent.map(|id| View { id, parent: None })
//!     }
//! }
//!
//! let container = View { id: 0, parent: None };
//! let view = View { id: 1, parent: Some(0) };
//!
//! let records = expand(
//!     &view,
//!     &[
//!         L::top().plus(5.0),
//!         L::left().plus(5.0),
//!         L::width().equal_to_constant(50.0),
//!         L::height().equal_to_constant(50.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(records.len(), 4);
//! assert_eq!(records[0].target, Some(container));
//! assert_eq!(records[0].constant, 5.0);
//! assert_eq!(records[2].target, None);
//! assert_eq!(records[2].target_attribute, Attribute::NotAnAttribute);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod attribute;
pub mod compile;
pub mod constraint;
pub mod element;
pub mod expression;

pub use attribute::{Attribute, Priority, Relation};
pub use compile::{
    apply, apply_all, apply_with_previous, expand, expand_all, expand_with_previous,
};
pub use constraint::{ConstraintRecord, ExpandError};
pub use element::{ConstraintSink, Element};
pub use expression::{AttributeGroup, LayoutExpression};
