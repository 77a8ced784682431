//! Fragment -> value -> fragment conversions must be lossless, down to
//! handle identity, and must never resolve a slot on the way through.

use arbor_core::prelude::*;
use std::sync::Arc;

#[derive(Debug)]
struct ViewProps {
    width: u32,
}

#[derive(Debug)]
struct ScrollState {
    offset: u32,
}

fn same_props(a: &SharedProps, b: &SharedProps) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn same_state(a: &SharedState, b: &SharedState) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn same_children(a: &SharedChildren, b: &SharedChildren) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[test]
fn fragment_survives_a_round_trip() {
    let props: SharedProps = Some(Arc::new(ViewProps { width: 320 }));
    let children: SharedChildren = Some(Arc::new(Vec::new()));
    let fragment = NodeFragment::new()
        .with_props(props.clone())
        .with_children(children.clone());

    let back = FragmentValue::from_fragment(&fragment).to_fragment();

    assert!(same_props(back.props.explicit().unwrap(), &props));
    assert!(same_children(back.children.explicit().unwrap(), &children));
    assert!(back.state.is_unspecified());
}

#[test]
fn value_survives_a_round_trip() {
    let state: SharedState = Some(Arc::new(ScrollState { offset: 12 }));
    let value = FragmentValue::from_fragment(&NodeFragment::new().with_state(state.clone()));

    let again = FragmentValue::from_fragment(&value.to_fragment());

    assert!(again.props.is_unspecified());
    assert!(again.children.is_unspecified());
    assert!(same_state(again.state.explicit().unwrap(), &state));
}

#[test]
fn snapshots_do_not_resolve_unspecified_slots() {
    let value = FragmentValue::from_fragment(&NodeFragment::new());
    assert!(value.props.is_unspecified());
    assert!(value.children.is_unspecified());
    assert!(value.state.is_unspecified());
}

#[test]
fn explicitly_empty_slots_stay_explicitly_empty() {
    let fragment = NodeFragment::new().with_children(None);
    let back = FragmentValue::from_fragment(&fragment).to_fragment();

    assert!(back.children.is_explicit());
    assert!(back.children.explicit().unwrap().is_none());
}

#[test]
fn state_only_override_keeps_its_shape_through_the_trip() {
    let state: SharedState = Some(Arc::new(ScrollState { offset: 7 }));
    let fragment = NodeFragment::new().with_state(state.clone());

    assert!(fragment.props.is_unspecified());
    assert!(fragment.children.is_unspecified());
    assert!(same_state(fragment.state.explicit().unwrap(), &state));

    let back = FragmentValue::from_fragment(&fragment).to_fragment();

    assert!(back.props.is_unspecified());
    assert!(back.children.is_unspecified());
    assert!(same_state(back.state.explicit().unwrap(), &state));
}
