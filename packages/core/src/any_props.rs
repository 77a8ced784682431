use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// An opaque bag of element properties.
///
/// The tree core never looks inside props. It clones handles, stores them in
/// nodes, and compares them by identity with [`Arc::ptr_eq`]; a rendering
/// backend downcasts through [`as_any`](AnyProps::as_any) when it needs the
/// concrete type back.
pub trait AnyProps: Any + Send + Sync + Debug {
    /// The concrete props object, for downcasting by the owning renderer.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + Debug> AnyProps for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared handle to an immutable props object.
///
/// `None` is a real value meaning "this element has no props". An
/// unspecified fragment slot is a different thing entirely; see
/// [`FragmentField`](crate::FragmentField).
pub type SharedProps = Option<Arc<dyn AnyProps>>;
