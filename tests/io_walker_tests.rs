use std::fs;
use tempfile::TempDir;
use tidyclass::io::walker::{find_source_files, is_declaration_file, FileWalker};

/// Helper function to create a test directory structure
fn create_test_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path();

    fs::create_dir_all(base_path.join("src/nested")).unwrap();
    fs::write(base_path.join("src/app.ts"), "export class App {}").unwrap();
    fs::write(base_path.join("src/view.tsx"), "export class View {}").unwrap();
    fs::write(base_path.join("src/legacy.js"), "class Legacy {}").unwrap();
    fs::write(base_path.join("src/types.d.ts"), "declare class T {}").unwrap();
    fs::write(base_path.join("src/nested/deep.ts"), "class Deep {}").unwrap();
    fs::write(base_path.join("src/README.md"), "# Readme").unwrap();

    fs::create_dir_all(base_path.join("node_modules/lib")).unwrap();
    fs::write(base_path.join("node_modules/lib/index.ts"), "class Lib {}").unwrap();
    fs::create_dir_all(base_path.join("dist")).unwrap();
    fs::write(base_path.join("dist/app.ts"), "class Built {}").unwrap();
    fs::create_dir_all(base_path.join(".git")).unwrap();
    fs::write(base_path.join(".git/hook.ts"), "class Hook {}").unwrap();

    temp_dir
}

#[test]
fn test_walk_finds_typescript_sources_only() {
    let temp_dir = create_test_directory();
    let files = FileWalker::new(temp_dir.path().to_path_buf()).walk().unwrap();

    let relative: Vec<String> = files
        .iter()
        .map(|f| {
            f.strip_prefix(temp_dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(relative, vec!["src/app.ts", "src/nested/deep.ts"]);
}

#[test]
fn test_walk_with_extensions() {
    let temp_dir = create_test_directory();
    let files = find_source_files(
        temp_dir.path(),
        vec!["ts".to_string(), "tsx".to_string(), "js".to_string()],
    )
    .unwrap();

    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| !is_declaration_file(f)));
}

#[test]
fn test_walk_with_ignore_patterns() {
    let temp_dir = create_test_directory();
    let walker = FileWalker::new(temp_dir.path().to_path_buf())
        .with_ignore_patterns(vec!["**/nested/**".to_string()]);

    let files = walker.walk().unwrap();

    // dist/ is no longer ignored once the defaults are replaced
    assert_eq!(files.len(), 2);
    assert!(!files.iter().any(|f| f.to_string_lossy().contains("nested")));
    assert!(!files.iter().any(|f| f.to_string_lossy().contains("node_modules")));
}

#[test]
fn test_walk_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let files = FileWalker::new(temp_dir.path().to_path_buf()).walk().unwrap();
    assert!(files.is_empty());
}
