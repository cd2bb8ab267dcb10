//! Pre-order traversal of the collection tree
//!
//! The walk uses an explicit stack, so nesting depth is bounded only by what
//! the JSON decoder accepted.

use crate::postman::{CollectionItem, Folder, RequestItem};
use std::ops::ControlFlow;

/// Callbacks invoked while walking a collection tree
#[cfg_attr(test, mockall::automock)]
pub trait CollectionVisitor {
    /// Called before a folder's children are visited
    fn on_folder(&mut self, folder: &Folder) -> ControlFlow<()> {
        let _ = folder;
        ControlFlow::Continue(())
    }

    /// Called for each leaf request
    fn on_request(&mut self, item: &RequestItem) -> ControlFlow<()>;
}

/// Visit every node in document order, descending into folders first
///
/// Stops as soon as a callback returns `ControlFlow::Break`.
pub fn walk_items<V>(items: &[CollectionItem], visitor: &mut V) -> ControlFlow<()>
where
    V: CollectionVisitor + ?Sized,
{
    let mut stack: Vec<&CollectionItem> = items.iter().rev().collect();

    while let Some(item) = stack.pop() {
        match item {
            CollectionItem::Folder(folder) => {
                visitor.on_folder(folder)?;
                stack.extend(folder.item.iter().rev());
            }
            CollectionItem::Request(request) => visitor.on_request(request)?,
            CollectionItem::Other(_) => {}
        }
    }

    ControlFlow::Continue(())
}
