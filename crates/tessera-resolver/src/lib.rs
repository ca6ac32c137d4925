//! Reference resolution and tree flattening for Tessera tokens.
//!
//! Two resolution strategies live here:
//! - [`resolve::resolve_value`] converts a raw token value into target
//!   text (CSS variable handles or config-literal passthrough).
//! - [`literal::LiteralResolver`] chases references against the base
//!   token tree until only concrete values remain, for the design-tool
//!   exports.
//!
//! [`flatten`] walks a token tree into the ordered flat entry list the
//! generators consume.

pub mod flatten;
pub mod literal;
pub mod resolve;

pub use flatten::{flatten_document, FlattenedToken};
pub use literal::LiteralResolver;
pub use resolve::{resolve_value, Resolved, Target};
