use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use ignore::WalkBuilder;

/// Reads each file, or each `.svg` file within a directory and it's subdirectories.
///
/// Directories are walked in file name order, skipping hidden and ignored files.
pub fn load_files(paths: &[PathBuf]) -> anyhow::Result<Vec<(PathBuf, String)>> {
    let mut files = vec![];
    for path in paths {
        let walk = WalkBuilder::new(path)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();
        for entry in walk {
            let entry = entry.with_context(|| format!("Cannot read {}", path.display()))?;
            if entry.file_type().is_none_or(|file_type| !file_type.is_file()) {
                continue;
            }
            // files named explicitly are read whatever their extension
            if entry.depth() > 0 && entry.path().extension().and_then(OsStr::to_str) != Some("svg")
            {
                continue;
            }
            let path = entry.into_path();
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            files.push((path, source));
        }
    }
    Ok(files)
}

/// Writes the contents to stdout, to a file, or into a directory using the source's file name
pub fn write_file(output: Option<&Path>, source: &Path, contents: &str) -> anyhow::Result<()> {
    let Some(output) = output else {
        print!("{contents}");
        return Ok(());
    };

    let destination = if output.is_dir() {
        let file_name = source
            .file_name()
            .with_context(|| format!("{} has no file name", source.display()))?;
        output.join(file_name)
    } else {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        output.to_path_buf()
    };
    std::fs::write(&destination, contents)
        .with_context(|| format!("Cannot write {}", destination.display()))?;
    log::info!("wrote {}", destination.display());
    Ok(())
}

#[test]
fn files() -> anyhow::Result<()> {
    use pretty_assertions::assert_eq;

    let dir = std::env::temp_dir().join(format!("svgshape-fs-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("nested"))?;
    std::fs::write(dir.join("a.svg"), "<svg/>")?;
    std::fs::write(dir.join("nested").join("b.svg"), "<svg></svg>")?;
    std::fs::write(dir.join("notes.txt"), "")?;
    std::fs::write(dir.join(".hidden.svg"), "<svg/>")?;

    let files = load_files(&[dir.clone(), dir.join("notes.txt")])?;
    let names: Vec<_> = files
        .iter()
        .map(|(path, _)| path.strip_prefix(&dir).map(Path::to_path_buf))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        names,
        [
            PathBuf::from("a.svg"),
            PathBuf::from("nested").join("b.svg"),
            PathBuf::from("notes.txt"),
        ]
    );

    let output = dir.join("out");
    std::fs::create_dir_all(&output)?;
    write_file(Some(&output), &files[0].0, "<svg/>")?;
    assert_eq!(std::fs::read_to_string(output.join("a.svg"))?, "<svg/>");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
