//! Checks that every source file has a unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Crate roots and module declarations carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    // Tests each source module has a matching file under tests/unit
    // Verified by deleting tests/unit/pixel/point.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap_or_default();
        assert!(!sources.is_empty(), "no source files found under {SOURCE_ROOT}");

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source module
    // Verified by adding tests/unit/pixel/palette.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap_or_default();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_organizational(path) && !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-organizational test file declares at least one test
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let files = relative_paths(tests_root).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_organizational(path))
            .filter(|path| {
                fs::read_to_string(tests_root.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    /// Directories and `.rs` files below `base`, relative and `/`-separated
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Ok(relative) = path.strip_prefix(base) else {
                return Err(io::Error::other("entry outside of the scanned root"));
            };
            let relative = relative
                .components()
                .map(|part| part.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }
}
