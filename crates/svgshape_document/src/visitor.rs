//! Streaming of a parsed document as start and end element events.
use crate::error::Error;

/// The maximum depth of elements that will be walked
pub const DEPTH_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether a visited element's children should be walked
pub enum Walk {
    /// Visit the children of the element
    Children,
    /// Don't visit anything within the element
    Skip,
}

/// A trait for visiting the elements of a document in order
#[allow(unused_variables)]
pub trait Visitor<'a, 'input: 'a> {
    /// The error returned when a visit fails
    type Error: From<Error>;

    /// Visits an element, before any of it's children
    ///
    /// # Errors
    /// Whether the visitor fails
    fn element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<Walk, Self::Error> {
        Ok(Walk::Children)
    }

    /// Exits an element, after all of it's children.
    ///
    /// This is called for every visited element, including those that were skipped.
    ///
    /// # Errors
    /// Whether the visitor fails
    fn exit_element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Walks the element and it's descendants
    ///
    /// # Errors
    /// If the visitor fails, or the elements are nested deeper than [`DEPTH_LIMIT`]
    fn start(&mut self, root: roxmltree::Node<'a, 'input>) -> Result<(), Self::Error> {
        walk_element(self, root, 0)
    }
}

fn walk_element<'a, 'input: 'a, V: Visitor<'a, 'input> + ?Sized>(
    visitor: &mut V,
    element: roxmltree::Node<'a, 'input>,
    depth: usize,
) -> Result<(), V::Error> {
    if depth > DEPTH_LIMIT {
        return Err(Error::NodesLimitReached.into());
    }
    if visitor.element(element)? == Walk::Children {
        for child in element.children().filter(roxmltree::Node::is_element) {
            walk_element(visitor, child, depth + 1)?;
        }
    }
    visitor.exit_element(element)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Events(Vec<String>);

    impl<'a, 'input: 'a> Visitor<'a, 'input> for Events {
        type Error = Error;

        fn element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<Walk, Error> {
            let name = element.tag_name().name();
            self.0.push(format!("<{name}>"));
            Ok(if name == "defs" {
                Walk::Skip
            } else {
                Walk::Children
            })
        }

        fn exit_element(&mut self, element: roxmltree::Node<'a, 'input>) -> Result<(), Error> {
            self.0.push(format!("</{}>", element.tag_name().name()));
            Ok(())
        }
    }

    #[test]
    fn events_in_order() {
        let document = roxmltree::Document::parse(
            "<svg><g><path/>text</g><defs><rect/></defs><!-- comment --></svg>",
        )
        .unwrap();
        let mut events = Events::default();
        events.start(document.root_element()).unwrap();
        assert_eq!(
            events.0,
            [
                "<svg>", "<g>", "<path>", "</path>", "</g>", "<defs>", "</defs>", "</svg>"
            ]
        );
    }

    #[test]
    fn depth_limit() {
        let document = roxmltree::Document::parse("<g><g/></g>").unwrap();
        let mut events = Events::default();
        assert!(walk_element(&mut events, document.root_element(), DEPTH_LIMIT - 1).is_ok());
        let result = walk_element(&mut events, document.root_element(), DEPTH_LIMIT);
        assert!(matches!(result, Err(Error::NodesLimitReached)));
    }
}
