//! Core value types for the arbor shadow tree.
//!
//! Shadow nodes are immutable; an update clones a node with a
//! [`NodeFragment`] carrying per-field overrides. Each fragment slot is
//! either [`Explicit`](FragmentField::Explicit), possibly holding an empty
//! value, or [`Unspecified`](FragmentField::Unspecified), in which case the
//! clone inherits the field from the node it was cloned from. A snapshot of
//! the resolved slots lives inside each node as a [`FragmentValue`].
//!
//! Keeping "unspecified" and "explicitly empty" apart is the load-bearing
//! contract here: a caller that clears a subtree passes an explicit empty
//! child list, while a caller that only swaps state leaves the child slot
//! unspecified and the subtree rides along untouched.

mod any_props;
mod any_state;
mod fragment;
mod node;

pub(crate) mod innerlude {
    pub use crate::any_props::*;
    pub use crate::any_state::*;
    pub use crate::fragment::*;
    pub use crate::node::*;
}

pub use innerlude::{
    empty_children, AnyProps, AnyState, FragmentField, FragmentValue, NodeFragment, ShadowNode,
    SharedChildren, SharedNode, SharedProps, SharedState,
};

/// Everything a consumer of the tree core usually wants in scope.
pub mod prelude {
    pub use crate::innerlude::*;
}
