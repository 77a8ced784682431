use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Opaque engine-owned state attached to a node, consumed the same way as
/// [`AnyProps`](crate::AnyProps): by handle identity only.
pub trait AnyState: Any + Send + Sync + Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + Debug> AnyState for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared handle to an immutable state object, `None` for stateless nodes.
pub type SharedState = Option<Arc<dyn AnyState>>;
