use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Patterns skipped unless the configuration says otherwise, matched against
/// the path relative to the walk root.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "node_modules/**",
    "**/node_modules/**",
    "dist/**",
    "coverage/**",
    ".next/**",
];

/// Directories never descended into.
const PRUNED_DIRS: &[&str] = &["node_modules", ".git"];

pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["ts".to_string()],
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Walk the tree and return matching files, sorted for a stable order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let patterns: Vec<glob::Pattern> = self
            .ignore_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| PRUNED_DIRS.contains(&name)))
            })
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path, patterns: &[glob::Pattern]) -> bool {
        if is_declaration_file(path) {
            return false;
        }

        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        if !matches_extension {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative_str = relative.to_string_lossy().replace('\\', "/");
        !patterns.iter().any(|p| p.matches(&relative_str))
    }
}

/// `.d.ts` files only declare types and are never rewritten.
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.ends_with(".d.ts") || name.ends_with(".d.mts") || name.ends_with(".d.cts")
        })
}

pub fn find_source_files(root: &Path, extensions: Vec<String>) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_extensions(extensions)
        .walk()
}
