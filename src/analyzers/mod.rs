pub mod typescript;

use crate::analyzers::typescript::{collect_classes, detect_variant, parse_source, ClassDeclaration};
use crate::errors::Result;
use std::path::Path;

/// Parse a source file and return its class declarations in source order.
pub fn parse_classes(content: &str, path: &Path) -> Result<Vec<ClassDeclaration>> {
    let ast = parse_source(content, path, detect_variant(path))?;
    Ok(collect_classes(&ast))
}
