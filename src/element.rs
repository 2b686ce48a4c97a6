//! Host framework seams: the elements being laid out and the engine that
//! activates their constraints.

use crate::constraint::ConstraintRecord;

/// Anything that can be constrained: views, layout guides, or whatever
/// handle the host framework uses for them.
///
/// Implement this on a cheap handle (an id, an `Rc`). Records clone it once
/// per emitted constraint.
pub trait Element: Clone + PartialEq {
    /// The element providing the coordinate frame for this one.
    ///
    /// For a view this is its superview; for a layout guide, its owning view.
    /// `None` means the element is not in a tree yet and cannot be laid out.
    fn container(&self) -> Option<Self>;

    /// Called by the `apply*` functions before the element's constraints are
    /// activated. Hosts that translate legacy frame sizing into constraints
    /// switch that off here.
    fn prepare_for_layout(&self) {}
}

/// The host layout engine.
///
/// Both operations act on a batch, are idempotent per record, and do not
/// depend on record order. This crate never retains records after handing
/// them over; callers keep the returned lists to toggle layouts later.
pub trait ConstraintSink<E> {
    fn activate(&mut self, records: &[ConstraintRecord<E>]);

    fn deactivate(&mut self, records: &[ConstraintRecord<E>]);
}

impl<E, S: ConstraintSink<E> + ?Sized> ConstraintSink<E> for &mut S {
    fn activate(&mut self, records: &[ConstraintRecord<E>]) {
        (**self).activate(records);
    }

    fn deactivate(&mut self, records: &[ConstraintRecord<E>]) {
        (**self).deactivate(records);
    }
}
