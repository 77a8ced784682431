//! Partial-override fragments and their storable snapshots.
//!
//! These are the inputs to node construction: a [`NodeFragment`] says which
//! fields of the source node to replace, and a [`FragmentValue`] is the
//! field-for-field snapshot a node keeps of the slots it was built from.

use crate::innerlude::*;

/// One override slot of a [`NodeFragment`].
///
/// A slot distinguishes three states. The payload type is itself nullable
/// (an `Option` of a shared handle), so `Explicit(None)` means the caller
/// asked for the field to be empty, while `Unspecified` means the caller
/// said nothing and the field should be inherited from the node being
/// cloned. The two must never be conflated: collapsing them would clear
/// state or subtrees on every clone.
///
/// Slots for different field kinds are different types
/// (`FragmentField<SharedProps>` vs `FragmentField<SharedState>`), so a
/// props marker can never be mistaken for a state marker.
#[derive(Clone, Debug, Default)]
pub enum FragmentField<T> {
    /// The caller did not supply this slot. Consumers inherit the value
    /// from the source node, or an engine default on first construction.
    #[default]
    Unspecified,
    /// The caller supplied this slot, possibly as an explicitly empty value.
    Explicit(T),
}

impl<T> FragmentField<T> {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, FragmentField::Unspecified)
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, FragmentField::Explicit(_))
    }

    /// The supplied override, if there is one.
    pub fn explicit(&self) -> Option<&T> {
        match self {
            FragmentField::Explicit(value) => Some(value),
            FragmentField::Unspecified => None,
        }
    }

    /// Resolve against the matching field of the node being cloned: an
    /// explicit override wins, an unspecified slot inherits `source`.
    pub fn resolve_from(&self, source: &T) -> T
    where
        T: Clone,
    {
        match self {
            FragmentField::Explicit(value) => value.clone(),
            FragmentField::Unspecified => source.clone(),
        }
    }

    /// Resolve with an engine default, for first construction when there is
    /// no source node to inherit from.
    pub fn resolve_with(self, default: impl FnOnce() -> T) -> T {
        match self {
            FragmentField::Explicit(value) => value,
            FragmentField::Unspecified => default(),
        }
    }
}

impl<T> From<T> for FragmentField<T> {
    fn from(value: T) -> Self {
        FragmentField::Explicit(value)
    }
}

/// Per-call bundle of field overrides for cloning or constructing a
/// [`ShadowNode`](crate::ShadowNode).
///
/// Fragments are transient: built for a single construction call, read by
/// the node constructor, then dropped. Any slot not filled in defaults to
/// [`FragmentField::Unspecified`]. The fragment validates nothing; whatever
/// handles the caller supplies are carried through verbatim.
#[derive(Clone, Debug, Default)]
pub struct NodeFragment {
    pub props: FragmentField<SharedProps>,
    pub children: FragmentField<SharedChildren>,
    pub state: FragmentField<SharedState>,
}

impl NodeFragment {
    /// A fragment with every slot unspecified. Cloning a node with it
    /// reproduces the node unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the props slot, `None` meaning "explicitly no props".
    pub fn with_props(mut self, props: SharedProps) -> Self {
        self.props = FragmentField::Explicit(props);
        self
    }

    /// Override the child list, `None` meaning "explicitly no children".
    pub fn with_children(mut self, children: SharedChildren) -> Self {
        self.children = FragmentField::Explicit(children);
        self
    }

    /// Override the state slot, `None` meaning "explicitly stateless".
    pub fn with_state(mut self, state: SharedState) -> Self {
        self.state = FragmentField::Explicit(state);
        self
    }
}

/// A storable snapshot of a fragment's slots.
///
/// Nodes keep their fields as one of these. The conversions in both
/// directions copy each slot as-is: a snapshot taken from a fragment that
/// still has unspecified slots keeps them unspecified. Substituting real
/// values for unspecified slots is the node constructor's job, not this
/// type's.
#[derive(Clone, Debug, Default)]
pub struct FragmentValue {
    pub props: FragmentField<SharedProps>,
    pub children: FragmentField<SharedChildren>,
    pub state: FragmentField<SharedState>,
}

impl FragmentValue {
    /// Snapshot the fragment's slots. Cheap: only handles are cloned, never
    /// the objects behind them.
    pub fn from_fragment(fragment: &NodeFragment) -> Self {
        Self {
            props: fragment.props.clone(),
            children: fragment.children.clone(),
            state: fragment.state.clone(),
        }
    }

    /// Turn the snapshot back into clone input. Together with
    /// [`from_fragment`](Self::from_fragment) this round-trips every slot,
    /// variant and handle identity included.
    pub fn to_fragment(&self) -> NodeFragment {
        NodeFragment {
            props: self.props.clone(),
            children: self.children.clone(),
            state: self.state.clone(),
        }
    }
}
