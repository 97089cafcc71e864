//! A plain LIFO used by the iterative tree algorithms to stand in for call
//! frames. The iterative traversals keep a stack of node references; the
//! postorder walk keeps a second `Stack<bool>` of "first visit" flags in
//! lockstep with it, and disposal keeps a stack of owned nodes.

/// An unbounded last-in first-out stack.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// An empty stack with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `element` on top.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// The top element without removing it.
    pub fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    /// A mutable reference to the top element.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.elements.last_mut()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The number of elements on the stack.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
