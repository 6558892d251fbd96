//! The stack of attributes inherited from enclosing groups.
use crate::attribute::AttributeMap;

#[derive(Debug, Default)]
/// A frame of resolved attributes for each group being walked.
///
/// Each frame already contains the attributes of the frames below it, so the top frame
/// is all that's inherited by the next element.
pub struct GroupStack {
    frames: Vec<AttributeMap>,
}

impl GroupStack {
    /// Returns the attributes inherited from the enclosing groups
    pub fn inherited(&self) -> AttributeMap {
        self.frames.last().cloned().unwrap_or_default()
    }

    /// Enters a group, with it's attributes already merged onto [`GroupStack::inherited`]
    pub fn push(&mut self, frame: AttributeMap) {
        self.frames.push(frame);
    }

    /// Leaves the innermost group
    pub fn pop(&mut self) -> Option<AttributeMap> {
        self.frames.pop()
    }

    /// The number of groups being walked
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[test]
fn frames() {
    let mut stack = GroupStack::default();
    assert!(stack.inherited().is_empty());

    let mut frame = stack.inherited();
    frame.insert("fill", "red");
    stack.push(frame);
    let mut frame = stack.inherited();
    frame.insert("stroke", "blue");
    stack.push(frame);
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.inherited().len(), 2);

    stack.pop();
    assert_eq!(stack.inherited().len(), 1);
    stack.pop();
    assert_eq!(stack.pop(), None);
}
