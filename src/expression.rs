//! The layout expression builder.
//!
//! A [`LayoutExpression`] describes one relationship, or one group of
//! parallel relationships for compound layouts like [`flush`](LayoutExpression::flush).
//! It starts from a named constructor and is refined by chained steps; each
//! step consumes the value and returns the updated one. Nothing is checked
//! here. Malformed expressions are rejected by [`expand`](crate::expand).
//!
//! # Example
//!
//! ```
//! use zenanchor::{Attribute, LayoutExpression, Priority, Relation};
//!
//! // left == view7.right + 7.5, at priority 750
//! let e: LayoutExpression<u32> = LayoutExpression::left()
//!     .equal_to(LayoutExpression::right().of(7).plus(7.5))
//!     .with_priority(Priority::DEFAULT_HIGH);
//!
//! assert_eq!(e.attribute(), Some(Attribute::Left));
//! assert_eq!(e.other_attribute(), Some(Attribute::Right));
//! assert_eq!(e.target(), Some(&7));
//! assert_eq!(e.relation(), Relation::Equal);
//! assert_eq!(e.constant(), 7.5);
//! ```

use num_traits::{One, Zero};
use smallvec::{SmallVec, smallvec};

use crate::attribute::{Attribute, Priority, Relation};

/// Ordered attributes of a compound expression. Never more than four.
pub type AttributeGroup = SmallVec<[Attribute; 4]>;

/// A declarative, not yet compiled, layout relationship.
///
/// `E` is the host's element handle. Defaults: relation [`Relation::Equal`],
/// multiplier 1, constant 0, no priority, and no target (measured against the
/// element's container).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutExpression<E> {
    attribute: Option<Attribute>,
    attributes: Option<AttributeGroup>,
    relation: Option<Relation>,
    target: Option<E>,
    other_attribute: Option<Attribute>,
    other_attributes: Option<AttributeGroup>,
    // None until set explicitly; merges only adopt explicit multipliers.
    multiplier: Option<f64>,
    constant: f64,
    priority: Option<Priority>,
}

impl<E> Default for LayoutExpression<E> {
    /// An expression with no attribute at all. Expanding it fails with
    /// [`ExpandError::UndefinedAttribute`](crate::ExpandError::UndefinedAttribute).
    fn default() -> Self {
        Self {
            attribute: None,
            attributes: None,
            relation: None,
            target: None,
            other_attribute: None,
            other_attributes: None,
            multiplier: None,
            constant: f64::zero(),
            priority: None,
        }
    }
}

macro_rules! single_attribute_constructors {
    ($($(#[$doc:meta])* $name:ident => $attr:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name() -> Self {
                Self::new(Attribute::$attr)
            }
        )*
    };
}

// ============================================================================
// Constructors
// ============================================================================

impl<E> LayoutExpression<E> {
    /// Expression over a single attribute, relative to the container.
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute: Some(attribute),
            ..Self::default()
        }
    }

    /// Low-level compound constructor.
    ///
    /// `other_attributes` pairs positionally with `attributes`. When omitted,
    /// each attribute is related to the same attribute on the target.
    pub fn with_attributes(
        attributes: &[Attribute],
        other_attributes: Option<&[Attribute]>,
    ) -> Self {
        Self {
            attributes: Some(AttributeGroup::from_slice(attributes)),
            other_attributes: other_attributes.map(AttributeGroup::from_slice),
            ..Self::default()
        }
    }

    single_attribute_constructors! {
        /// Left edge of the alignment rectangle.
        left => Left;
        /// Right edge of the alignment rectangle.
        right => Right;
        /// Top edge of the alignment rectangle.
        top => Top;
        /// Bottom edge of the alignment rectangle.
        bottom => Bottom;
        /// Leading edge (left in left-to-right locales).
        leading => Leading;
        /// Trailing edge (right in left-to-right locales).
        trailing => Trailing;
        width => Width;
        height => Height;
        /// Horizontal center.
        center_x => CenterX;
        /// Vertical center.
        center_y => CenterY;
        /// Bottom-most baseline.
        baseline => Baseline;
        /// Top-most baseline.
        first_baseline => FirstBaseline;
        left_margin => LeftMargin;
        right_margin => RightMargin;
        top_margin => TopMargin;
        bottom_margin => BottomMargin;
        leading_margin => LeadingMargin;
        trailing_margin => TrailingMargin;
        /// Horizontal center between the left and right margins.
        center_x_within_margins => CenterXWithinMargins;
        /// Vertical center between the top and bottom margins.
        center_y_within_margins => CenterYWithinMargins;
    }

    /// All four edges: top, left, bottom, right.
    pub fn flush() -> Self {
        Self::with_attributes(
            &[Attribute::Top, Attribute::Left, Attribute::Bottom, Attribute::Right],
            None,
        )
    }

    /// All four edges, pinned to the target's margins.
    pub fn flush_to_margins() -> Self {
        Self::with_attributes(
            &[Attribute::Top, Attribute::Left, Attribute::Bottom, Attribute::Right],
            Some(&[
                Attribute::TopMargin,
                Attribute::LeftMargin,
                Attribute::BottomMargin,
                Attribute::RightMargin,
            ]),
        )
    }

    /// Left and right edges.
    pub fn horizontal() -> Self {
        Self::with_attributes(&[Attribute::Left, Attribute::Right], None)
    }

    /// Left and right edges, pinned to the target's margins.
    pub fn horizontal_margins() -> Self {
        Self::with_attributes(
            &[Attribute::Left, Attribute::Right],
            Some(&[Attribute::LeftMargin, Attribute::RightMargin]),
        )
    }

    /// Top and bottom edges.
    pub fn vertical() -> Self {
        Self::with_attributes(&[Attribute::Top, Attribute::Bottom], None)
    }

    /// Top and bottom edges, pinned to the target's margins.
    pub fn vertical_margins() -> Self {
        Self::with_attributes(
            &[Attribute::Top, Attribute::Bottom],
            Some(&[Attribute::TopMargin, Attribute::BottomMargin]),
        )
    }

    /// Horizontal and vertical center.
    pub fn center() -> Self {
        Self::with_attributes(&[Attribute::CenterX, Attribute::CenterY], None)
    }

    /// Horizontal and vertical center, within the target's margins.
    pub fn center_within_margins() -> Self {
        Self::with_attributes(
            &[Attribute::CenterX, Attribute::CenterY],
            Some(&[
                Attribute::CenterXWithinMargins,
                Attribute::CenterYWithinMargins,
            ]),
        )
    }

    /// Height and width.
    pub fn size() -> Self {
        Self::with_attributes(&[Attribute::Height, Attribute::Width], None)
    }
}

// ============================================================================
// Composition
// ============================================================================

impl<E> LayoutExpression<E> {
    /// Measure against `target` instead of the container.
    pub fn of(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    /// Same attribute(s) as on `target`. Relation is left as is.
    pub fn equal_to_element(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    /// Fixed value: no target, `NotAnAttribute` on the right-hand side.
    pub fn equal_to_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self.compare_to_constant();
        self
    }

    /// Relate to another expression's attribute(s) and target.
    ///
    /// `other`'s constant replaces ours only when non-zero, and its multiplier
    /// only when it was set explicitly, so `top().plus(5).equal_to(bottom().times(2))`
    /// keeps the 5 and adopts the 2.
    pub fn equal_to(self, other: LayoutExpression<E>) -> Self {
        self.merge(other, Relation::Equal)
    }

    /// Like [`equal_to`](Self::equal_to), with `>=`.
    pub fn greater_or_equal_to(self, other: LayoutExpression<E>) -> Self {
        self.merge(other, Relation::GreaterOrEqual)
    }

    /// `>= constant`. Resets the multiplier to 1.
    pub fn greater_or_equal_to_constant(self, constant: f64) -> Self {
        self.bound_by_constant(constant, Relation::GreaterOrEqual)
    }

    /// Like [`equal_to`](Self::equal_to), with `<=`.
    pub fn less_or_equal_to(self, other: LayoutExpression<E>) -> Self {
        self.merge(other, Relation::LessOrEqual)
    }

    /// `<= constant`. Resets the multiplier to 1.
    pub fn less_or_equal_to_constant(self, constant: f64) -> Self {
        self.bound_by_constant(constant, Relation::LessOrEqual)
    }

    /// Set the constant.
    pub fn plus(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    /// Set the constant to `-constant`.
    pub fn minus(mut self, constant: f64) -> Self {
        self.constant = -constant;
        self
    }

    /// Set the multiplier.
    pub fn times(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Set the multiplier to `1 / divisor`.
    pub fn divided_by(mut self, divisor: f64) -> Self {
        self.multiplier = Some(f64::one() / divisor);
        self
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    fn merge(mut self, other: LayoutExpression<E>, relation: Relation) -> Self {
        self.target = other.target;
        match other.attributes {
            Some(attributes) => self.other_attributes = Some(attributes),
            None => self.other_attribute = other.attribute,
        }
        self.relation = Some(relation);
        if !other.constant.is_zero() {
            self.constant = other.constant;
        }
        if let Some(multiplier) = other.multiplier
            && !multiplier.is_zero()
        {
            self.multiplier = Some(multiplier);
        }
        self
    }

    fn bound_by_constant(mut self, constant: f64, relation: Relation) -> Self {
        self.constant = constant;
        self.compare_to_constant();
        self.relation = Some(relation);
        self.multiplier = Some(f64::one());
        self
    }

    /// One `NotAnAttribute` per left-hand attribute.
    fn compare_to_constant(&mut self) {
        if self.attribute.is_some() {
            self.other_attribute = Some(Attribute::NotAnAttribute);
        } else if let Some(attributes) = &self.attributes {
            self.other_attributes = Some(smallvec![Attribute::NotAnAttribute; attributes.len()]);
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl<E> LayoutExpression<E> {
    pub fn attribute(&self) -> Option<Attribute> {
        self.attribute
    }

    pub fn attributes(&self) -> Option<&[Attribute]> {
        self.attributes.as_deref()
    }

    /// Explicit relation, or [`Relation::Equal`].
    pub fn relation(&self) -> Relation {
        self.relation.unwrap_or_default()
    }

    /// Explicit target. `None` means the element's container.
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    pub fn other_attribute(&self) -> Option<Attribute> {
        self.other_attribute
    }

    pub fn other_attributes(&self) -> Option<&[Attribute]> {
        self.other_attributes.as_deref()
    }

    /// Explicit multiplier, or 1.
    pub fn multiplier(&self) -> f64 {
        self.multiplier.unwrap_or_else(f64::one)
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Left-hand attributes: the group if present, else the single attribute.
    pub(crate) fn source_attributes(&self) -> Option<AttributeGroup> {
        match (&self.attributes, self.attribute) {
            (Some(attributes), _) => Some(attributes.clone()),
            (None, Some(attribute)) => Some(smallvec![attribute]),
            (None, None) => None,
        }
    }

    /// Right-hand attributes: explicit group, explicit single, then a mirror
    /// of the left-hand side.
    pub(crate) fn target_attributes(&self) -> AttributeGroup {
        if let Some(others) = &self.other_attributes {
            others.clone()
        } else if let Some(other) = self.other_attribute {
            smallvec![other]
        } else if let Some(attribute) = self.attribute {
            smallvec![attribute]
        } else if let Some(attributes) = &self.attributes {
            attributes.clone()
        } else {
            AttributeGroup::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Expr = LayoutExpression<u32>;

    // ── constructors ────────────────────────────────────────────────────

    #[test]
    fn single_constructor_defaults() {
        let e = Expr::top();
        assert_eq!(e.attribute(), Some(Attribute::Top));
        assert_eq!(e.attributes(), None);
        assert_eq!(e.relation(), Relation::Equal);
        assert_eq!(e.target(), None);
        assert_eq!(e.multiplier(), 1.0);
        assert_eq!(e.constant(), 0.0);
        assert_eq!(e.priority(), None);
    }

    #[test]
    fn compound_groups_are_ordered() {
        assert_eq!(
            Expr::flush().attributes(),
            Some(&[Attribute::Top, Attribute::Left, Attribute::Bottom, Attribute::Right][..])
        );
        assert_eq!(
            Expr::size().attributes(),
            Some(&[Attribute::Height, Attribute::Width][..])
        );
        assert_eq!(
            Expr::center().attributes(),
            Some(&[Attribute::CenterX, Attribute::CenterY][..])
        );
        assert_eq!(Expr::vertical().other_attributes(), None);
    }

    #[test]
    fn margin_groups_pair_with_margins() {
        let e = Expr::flush_to_margins();
        assert_eq!(
            e.other_attributes(),
            Some(
                &[
                    Attribute::TopMargin,
                    Attribute::LeftMargin,
                    Attribute::BottomMargin,
                    Attribute::RightMargin
                ][..]
            )
        );
        assert_eq!(
            Expr::horizontal_margins().other_attributes(),
            Some(&[Attribute::LeftMargin, Attribute::RightMargin][..])
        );
    }

    #[test]
    fn default_has_no_attribute() {
        let e = Expr::default();
        assert_eq!(e.source_attributes(), None);
        assert!(e.target_attributes().is_empty());
    }

    // ── arithmetic ──────────────────────────────────────────────────────

    #[test]
    fn plus_and_minus_set_constant() {
        assert_eq!(Expr::top().plus(8.0).constant(), 8.0);
        assert_eq!(Expr::top().minus(8.0).constant(), -8.0);
        // Last step wins; constants do not accumulate.
        assert_eq!(Expr::top().plus(8.0).minus(3.0).constant(), -3.0);
    }

    #[test]
    fn times_and_divided_by_set_multiplier() {
        assert_eq!(Expr::width().times(2.0).multiplier(), 2.0);
        assert_eq!(Expr::width().divided_by(2.0).multiplier(), 0.5);
    }

    #[test]
    fn steps_do_not_touch_the_original() {
        let base = Expr::left().plus(5.0);
        let derived = base.clone().times(3.0).with_priority(250.0_f32);
        assert_eq!(base.multiplier(), 1.0);
        assert_eq!(base.priority(), None);
        assert_eq!(derived.constant(), 5.0);
        assert_eq!(derived.priority(), Some(Priority::DEFAULT_LOW));
    }

    // ── comparisons ─────────────────────────────────────────────────────

    #[test]
    fn equal_to_constant_marks_fixed_value() {
        let e = Expr::width().equal_to_constant(100.0);
        assert_eq!(e.constant(), 100.0);
        assert_eq!(e.other_attribute(), Some(Attribute::NotAnAttribute));
        assert_eq!(e.relation(), Relation::Equal);
    }

    #[test]
    fn constant_sentinels_match_group_arity() {
        let e = Expr::size().equal_to_constant(40.0);
        assert_eq!(
            e.other_attributes(),
            Some(&[Attribute::NotAnAttribute, Attribute::NotAnAttribute][..])
        );
        assert_eq!(e.other_attribute(), None);
    }

    #[test]
    fn equal_to_element_only_sets_target() {
        let e = Expr::top().plus(3.0).equal_to_element(9);
        assert_eq!(e.target(), Some(&9));
        assert_eq!(e.other_attribute(), None);
        assert_eq!(e.constant(), 3.0);
    }

    #[test]
    fn merge_keeps_left_constant_and_adopts_right_multiplier() {
        let e = Expr::top().plus(5.0).equal_to(Expr::bottom().times(2.0));
        assert_eq!(e.constant(), 5.0);
        assert_eq!(e.multiplier(), 2.0);
        assert_eq!(e.other_attribute(), Some(Attribute::Bottom));
    }

    #[test]
    fn merge_adopts_right_constant_and_keeps_left_multiplier() {
        let e = Expr::width()
            .times(0.5)
            .plus(1.0)
            .equal_to(Expr::width().of(4).plus(-10.0));
        assert_eq!(e.constant(), -10.0);
        assert_eq!(e.multiplier(), 0.5);
        assert_eq!(e.target(), Some(&4));
    }

    #[test]
    fn merge_ignores_zero_multiplier() {
        let e = Expr::width()
            .times(3.0)
            .equal_to(Expr::height().times(0.0));
        assert_eq!(e.multiplier(), 3.0);
    }

    #[test]
    fn merge_takes_group_from_right() {
        let e = Expr::flush().equal_to(Expr::flush_to_margins().of(2));
        // The right side's own pairing is ignored; its left-hand group becomes ours.
        assert_eq!(
            e.other_attributes(),
            Some(&[Attribute::Top, Attribute::Left, Attribute::Bottom, Attribute::Right][..])
        );
        assert_eq!(e.target(), Some(&2));
    }

    #[test]
    fn merge_replaces_target_even_when_right_has_none() {
        let e = Expr::left().of(1).equal_to(Expr::right());
        assert_eq!(e.target(), None);
    }

    #[test]
    fn inequalities_set_relation() {
        let ge = Expr::width().greater_or_equal_to(Expr::width().of(3));
        assert_eq!(ge.relation(), Relation::GreaterOrEqual);
        let le = Expr::width().less_or_equal_to(Expr::height().of(3));
        assert_eq!(le.relation(), Relation::LessOrEqual);
        assert_eq!(le.other_attribute(), Some(Attribute::Height));
    }

    #[test]
    fn inequality_constant_resets_multiplier() {
        let e = Expr::height().times(4.0).greater_or_equal_to_constant(44.0);
        assert_eq!(e.relation(), Relation::GreaterOrEqual);
        assert_eq!(e.multiplier(), 1.0);
        assert_eq!(e.constant(), 44.0);
        assert_eq!(e.other_attribute(), Some(Attribute::NotAnAttribute));

        let e = Expr::horizontal().less_or_equal_to_constant(10.0);
        assert_eq!(e.relation(), Relation::LessOrEqual);
        assert_eq!(e.other_attributes().map(<[Attribute]>::len), Some(2));
    }

    // ── resolution ──────────────────────────────────────────────────────

    #[test]
    fn target_attributes_mirror_source_by_default() {
        assert_eq!(Expr::top().target_attributes().as_slice(), &[Attribute::Top]);
        assert_eq!(
            Expr::vertical().target_attributes().as_slice(),
            &[Attribute::Top, Attribute::Bottom]
        );
    }

    #[test]
    fn explicit_group_wins_over_single() {
        let e = Expr::flush_to_margins().equal_to(Expr::top());
        // other_attribute is set, but the explicit margin group takes precedence.
        assert_eq!(e.other_attribute(), Some(Attribute::Top));
        assert_eq!(e.target_attributes().len(), 4);
        assert_eq!(e.target_attributes()[0], Attribute::TopMargin);
    }
}
