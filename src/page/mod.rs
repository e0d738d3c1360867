//! Declarative page model: elements, documents, selectors, definitions

mod definition;
mod document;
mod node;
mod selector;

pub use definition::*;
pub use document::*;
pub use node::*;
pub use selector::*;
