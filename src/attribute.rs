//! Attribute, relation, and priority tokens shared with the host layout engine.

/// A geometric attribute of an element's alignment rectangle.
///
/// Mirrors the host engine's attribute set. [`NotAnAttribute`](Self::NotAnAttribute)
/// marks the target side of a fixed-value constraint, which has no comparison
/// element.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    /// Left in left-to-right locales, right otherwise.
    Leading,
    /// Right in left-to-right locales, left otherwise.
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    /// Bottom-most text baseline.
    Baseline,
    /// Top-most text baseline.
    FirstBaseline,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    LeadingMargin,
    TrailingMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
    /// No attribute. The constraint compares against a constant only.
    NotAnAttribute,
}

impl Attribute {
    /// False only for [`NotAnAttribute`](Self::NotAnAttribute).
    pub const fn is_attribute(self) -> bool {
        !matches!(self, Self::NotAnAttribute)
    }

    /// True for the margin-relative attributes.
    pub const fn is_margin(self) -> bool {
        matches!(
            self,
            Self::LeftMargin
                | Self::RightMargin
                | Self::TopMargin
                | Self::BottomMargin
                | Self::LeadingMargin
                | Self::TrailingMargin
                | Self::CenterXWithinMargins
                | Self::CenterYWithinMargins
        )
    }

    /// True for width and height.
    pub const fn is_dimension(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }

    /// Lower camel-case name, as the host engine spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Width => "width",
            Self::Height => "height",
            Self::CenterX => "centerX",
            Self::CenterY => "centerY",
            Self::Baseline => "baseline",
            Self::FirstBaseline => "firstBaseline",
            Self::LeftMargin => "leftMargin",
            Self::RightMargin => "rightMargin",
            Self::TopMargin => "topMargin",
            Self::BottomMargin => "bottomMargin",
            Self::LeadingMargin => "leadingMargin",
            Self::TrailingMargin => "trailingMargin",
            Self::CenterXWithinMargins => "centerXWithinMargins",
            Self::CenterYWithinMargins => "centerYWithinMargins",
            Self::NotAnAttribute => "notAnAttribute",
        }
    }
}

impl core::fmt::Display for Attribute {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the two sides of a constraint relate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    #[default]
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Relation {
    /// Infix operator used when printing a constraint.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }
}

/// Constraint priority, from 1 (optional) to 1000 (required).
///
/// Expressions without an explicit priority leave the host engine's
/// default in place.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub f32);

impl Priority {
    /// The constraint must be satisfied.
    pub const REQUIRED: Self = Self(1000.0);
    /// Level a button resists compressing its content at.
    pub const DEFAULT_HIGH: Self = Self(750.0);
    /// Level a button hugs its content at.
    pub const DEFAULT_LOW: Self = Self(250.0);
    /// Level at which a view wants to conform to its fitting size.
    pub const FITTING_SIZE: Self = Self(50.0);

    pub const fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self(value)
    }
}
