//! Expression expansion and activation.
//!
//! [`expand`] is pure: it resolves each expression against the element and
//! its container and returns the records. The `apply*` functions expand,
//! then hand the whole batch to a [`ConstraintSink`] in one call. Either the
//! whole batch is activated or, on error, nothing is.

use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use crate::constraint::{ConstraintRecord, ExpandError};
use crate::element::{ConstraintSink, Element};
use crate::expression::LayoutExpression;

/// Compile `expressions` into constraint records for `element`.
///
/// Compound expressions emit one record per attribute pair. Attribute groups
/// of different lengths are paired up to the shorter one; the rest is
/// dropped. Records against `NotAnAttribute` have no target; all others
/// target the expression's element, or the container when it has none.
pub fn expand<E: Element>(
    element: &E,
    expressions: &[LayoutExpression<E>],
) -> Result<Vec<ConstraintRecord<E>>, ExpandError> {
    let container = element.container().ok_or(ExpandError::MissingContainer)?;

    let mut records = Vec::with_capacity(expressions.len());
    for (index, expression) in expressions.iter().enumerate() {
        let sources = expression
            .source_attributes()
            .ok_or(ExpandError::UndefinedAttribute { index })?;
        let targets = expression.target_attributes();
        if sources.len() != targets.len() {
            // TODO: decide whether a length mismatch should become an ExpandError.
            warn!(
                index,
                sources = sources.len(),
                targets = targets.len(),
                "attribute group lengths differ, pairing the common prefix"
            );
        }

        for (&attribute, &target_attribute) in sources.iter().zip(targets.iter()) {
            let target = target_attribute
                .is_attribute()
                .then(|| expression.target().unwrap_or(&container).clone());
            trace!(
                index,
                %attribute,
                relation = expression.relation().symbol(),
                %target_attribute,
                multiplier = expression.multiplier(),
                constant = expression.constant(),
                "constraint"
            );
            records.push(ConstraintRecord {
                element: element.clone(),
                attribute,
                relation: expression.relation(),
                target,
                target_attribute,
                multiplier: expression.multiplier(),
                constant: expression.constant(),
                priority: expression.priority(),
            });
        }
    }

    debug!(
        expressions = expressions.len(),
        records = records.len(),
        "expanded layout"
    );
    Ok(records)
}

/// [`expand`] the same expressions for each element, in order.
pub fn expand_all<E: Element>(
    elements: &[E],
    expressions: &[LayoutExpression<E>],
) -> Result<Vec<ConstraintRecord<E>>, ExpandError> {
    let mut records = Vec::new();
    for element in elements {
        records.extend(expand(element, expressions)?);
    }
    Ok(records)
}

/// Expand each element against its predecessor.
///
/// `callback` receives the previous element and returns the expressions for
/// the current one. The first element has no predecessor and gets no records.
///
/// ```
/// # use zenanchor::{Element, LayoutExpression, expand_with_previous};
/// # #[derive(Clone, Debug, PartialEq)]
/// # struct View(u32);
/// # impl Element for View {
/// #     fn container(&self) -> Option<Self> { Some(View(0)) }
/// # }
/// let views = [View(1), View(2), View(3)];
/// let records = expand_with_previous(&views, |previous| {
///     vec![LayoutExpression::left().equal_to(LayoutExpression::right().of(previous.clone()).plus(8.0))]
/// })
/// .unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].element, View(2));
/// assert_eq!(records[0].target, Some(View(1)));
/// ```
pub fn expand_with_previous<E, F>(
    elements: &[E],
    mut callback: F,
) -> Result<Vec<ConstraintRecord<E>>, ExpandError>
where
    E: Element,
    F: FnMut(&E) -> Vec<LayoutExpression<E>>,
{
    let mut records = Vec::new();
    for pair in elements.windows(2) {
        let expressions = callback(&pair[0]);
        records.extend(expand(&pair[1], &expressions)?);
    }
    Ok(records)
}

/// [`expand`], then activate the records.
///
/// Returns the activated records so the caller can deactivate or reactivate
/// exactly this set later.
pub fn apply<E, S>(
    sink: &mut S,
    element: &E,
    expressions: &[LayoutExpression<E>],
) -> Result<Vec<ConstraintRecord<E>>, ExpandError>
where
    E: Element,
    S: ConstraintSink<E> + ?Sized,
{
    let records = expand(element, expressions)?;
    element.prepare_for_layout();
    activate(sink, &records);
    Ok(records)
}

/// [`expand_all`], then activate all records in one batch.
pub fn apply_all<E, S>(
    sink: &mut S,
    elements: &[E],
    expressions: &[LayoutExpression<E>],
) -> Result<Vec<ConstraintRecord<E>>, ExpandError>
where
    E: Element,
    S: ConstraintSink<E> + ?Sized,
{
    let records = expand_all(elements, expressions)?;
    elements.iter().for_each(Element::prepare_for_layout);
    activate(sink, &records);
    Ok(records)
}

/// [`expand_with_previous`], then activate all records in one batch.
pub fn apply_with_previous<E, S, F>(
    sink: &mut S,
    elements: &[E],
    callback: F,
) -> Result<Vec<ConstraintRecord<E>>, ExpandError>
where
    E: Element,
    S: ConstraintSink<E> + ?Sized,
    F: FnMut(&E) -> Vec<LayoutExpression<E>>,
{
    let records = expand_with_previous(elements, callback)?;
    elements
        .iter()
        .skip(1)
        .for_each(Element::prepare_for_layout);
    activate(sink, &records);
    Ok(records)
}

fn activate<E, S: ConstraintSink<E> + ?Sized>(sink: &mut S, records: &[ConstraintRecord<E>]) {
    debug!(records = records.len(), "activating constraints");
    sink.activate(records);
}
