//! Element/priority pairs stored by the queues

/// An element tagged with its current priority
///
/// The element never changes once inserted; only the owning queue may
/// update the priority, so the heap ordering cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityNode<E> {
    element: E,
    priority: f64,
}

impl<E> PriorityNode<E> {
    pub(crate) fn new(element: E, priority: f64) -> Self {
        Self { element, priority }
    }

    /// Returns the element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns the current priority
    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub(crate) fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    /// Consumes the node, returning the element
    pub fn into_element(self) -> E {
        self.element
    }

    /// Consumes the node, returning `(element, priority)`
    pub fn into_parts(self) -> (E, f64) {
        (self.element, self.priority)
    }
}
