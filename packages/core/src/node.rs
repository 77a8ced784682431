use crate::innerlude::*;
use std::sync::{Arc, OnceLock};

/// Shared handle to an immutable node.
pub type SharedNode = Arc<ShadowNode>;

/// Shared, immutable, ordered list of child nodes. As with props and state,
/// `None` is an explicit value (no child list), distinct from an unspecified
/// fragment slot.
pub type SharedChildren = Option<Arc<Vec<SharedNode>>>;

/// The canonical empty child list.
///
/// Allocated once per process on first use and shared by every leaf node,
/// so childless nodes do not each carry their own empty `Vec`. The backing
/// [`OnceLock`] admits exactly one initialization no matter how many threads
/// race the first call, and the storage lives for the rest of the process.
pub fn empty_children() -> SharedChildren {
    static EMPTY: OnceLock<Arc<Vec<SharedNode>>> = OnceLock::new();
    Some(EMPTY.get_or_init(|| Arc::new(Vec::new())).clone())
}

const NO_PROPS: &SharedProps = &None;
const NO_CHILDREN: &SharedChildren = &None;
const NO_STATE: &SharedState = &None;

/// One immutable element of the shadow tree.
///
/// Nodes are never mutated in place. An update clones the node with a
/// [`NodeFragment`]: each explicit slot replaces the field verbatim and
/// each unspecified slot carries the old handle forward. The resolved
/// fields live in an embedded [`FragmentValue`].
#[derive(Debug)]
pub struct ShadowNode {
    value: FragmentValue,
}

impl ShadowNode {
    /// Build a node with no source to inherit from. Unspecified slots fall
    /// back to the engine defaults: no props, the shared empty child list,
    /// no state.
    pub fn new(fragment: NodeFragment) -> Self {
        tracing::trace!("creating shadow node from {fragment:?}");
        let NodeFragment {
            props,
            children,
            state,
        } = fragment;
        Self {
            value: FragmentValue {
                props: FragmentField::Explicit(props.resolve_with(|| None)),
                children: FragmentField::Explicit(children.resolve_with(empty_children)),
                state: FragmentField::Explicit(state.resolve_with(|| None)),
            },
        }
    }

    /// Clone this node, replacing only the fields the fragment specifies.
    pub fn clone_with(&self, fragment: &NodeFragment) -> Self {
        tracing::trace!("cloning shadow node with {fragment:?}");
        Self {
            value: FragmentValue {
                props: FragmentField::Explicit(fragment.props.resolve_from(self.props())),
                children: FragmentField::Explicit(fragment.children.resolve_from(self.children())),
                state: FragmentField::Explicit(fragment.state.resolve_from(self.state())),
            },
        }
    }

    /// Adopt an existing snapshot as-is. No resolution is performed, so the
    /// node may hold unspecified slots; the accessors read those as empty.
    pub fn from_value(value: FragmentValue) -> Self {
        Self { value }
    }

    pub fn props(&self) -> &SharedProps {
        self.value.props.explicit().unwrap_or(NO_PROPS)
    }

    pub fn children(&self) -> &SharedChildren {
        self.value.children.explicit().unwrap_or(NO_CHILDREN)
    }

    pub fn state(&self) -> &SharedState {
        self.value.state.explicit().unwrap_or(NO_STATE)
    }

    /// The node's stored snapshot, e.g. for re-use as clone input via
    /// [`FragmentValue::to_fragment`].
    pub fn value(&self) -> &FragmentValue {
        &self.value
    }
}
