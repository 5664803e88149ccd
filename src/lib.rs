//! semweave: semantic intent resolution for design-system elements
//!
//! Turns a small vocabulary of semantic attributes (role, prominence, intent,
//! density) into concrete, styled, accessible elements. A node's explicit
//! props merge with the context frame inherited from its ancestors, a
//! per-family [`registry::RoleRegistry`] picks the role descriptor, and the
//! token and interactive-state resolvers produce class groups that the
//! [`compose::StyleComposer`] joins in a fixed order before the role's
//! renderer emits the element.
//!
//! ```
//! use semweave::{Family, ParentContext, Pipeline, Prominence, RoleRegistry, SemanticProps};
//!
//! let registry = RoleRegistry::new();
//! let pipeline = Pipeline::new(&registry);
//! let props = SemanticProps::new().with_prominence(Prominence::Hero);
//! let rendered = pipeline.render(Family::Text, "Title", &props, vec!["Hello".into()], ParentContext::Root);
//! assert_eq!(rendered.element.tag, "h1");
//! ```

pub mod cli;
pub mod compose;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod element;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod node;
pub mod pipeline;
pub mod registry;
pub mod renderer;
pub mod tokens;
pub mod vocabulary;

pub use context::{ContextFrame, ParentContext};
pub use element::{Element, Node};
pub use error::ApiError;
pub use node::{SemanticNode, SemanticProps};
pub use pipeline::{Pipeline, Rendered};
pub use registry::{RoleDescriptor, RoleRegistry};
pub use tokens::{resolve_tokens, TokenSet};
pub use vocabulary::{Density, Family, Intent, Prominence, Size};
