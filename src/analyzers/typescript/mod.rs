//! TypeScript/JavaScript syntax-tree access
//!
//! This module is the only place that knows about tree-sitter. It provides:
//!
//! - Parsing with the TS/TSX/JS/JSX grammars (`parser`)
//! - Class discovery and member handles with verbatim text (`classes`)
//!
//! # Example
//!
//! ```ignore
//! use tidyclass::analyzers::typescript::{collect_classes, parse_source};
//!
//! let ast = parse_source(source_code, path, JsLanguageVariant::TypeScript)?;
//! for class in collect_classes(&ast) {
//!     println!("{} has {} members", class.display_name(), class.members.len());
//! }
//! ```

pub mod classes;
pub mod parser;

pub use classes::{
    collect_classes, line_ending, ClassDeclaration, HandleKind, MemberHandle, SharedClosingLine,
};
pub use parser::{detect_variant, parse_source};
