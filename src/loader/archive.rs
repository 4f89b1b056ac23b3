// Thu Aug 06 2026 - Alex

use crate::loader::classfile::parse_class;
use crate::loader::error::LoadError;
use crate::model::ClassInfo;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Load a collection of classes from a path: a jar/zip archive, a
/// directory tree or a single class file. Keys are internal class
/// names.
pub fn load_classes(path: &Path) -> Result<BTreeMap<String, ClassInfo>, LoadError> {
    let mut classes = BTreeMap::new();
    if path.is_dir() {
        load_directory(path, &mut classes)?;
    } else if has_extension(path, "class") {
        let info = load_class_file(path)?;
        classes.insert(info.name().to_string(), info);
    } else if has_extension(path, "jar") || has_extension(path, "zip") {
        load_archive(path, &mut classes)?;
    } else {
        return Err(LoadError::UnsupportedInput(path.to_path_buf()));
    }
    log::info!("loaded {} classes from {}", classes.len(), path.display());
    Ok(classes)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn load_class_file(path: &Path) -> Result<ClassInfo, LoadError> {
    let data = std::fs::read(path)?;
    parse_class(&data).map_err(|source| LoadError::Entry {
        entry: path.display().to_string(),
        source: Box::new(source),
    })
}

fn load_directory(
    root: &Path,
    classes: &mut BTreeMap<String, ClassInfo>,
) -> Result<(), LoadError> {
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if has_extension(&path, "class") {
                let info = load_class_file(&path)?;
                classes.insert(info.name().to_string(), info);
            }
        }
    }
    Ok(())
}

fn load_archive(path: &Path, classes: &mut BTreeMap<String, ClassInfo>) -> Result<(), LoadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| LoadError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| LoadError::Archive {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.is_dir() || !entry.name().ends_with(".class") {
            continue;
        }
        let entry_name = entry.name().to_string();
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        let info = parse_class(&data).map_err(|source| LoadError::Entry {
            entry: entry_name,
            source: Box::new(source),
        })?;
        classes.insert(info.name().to_string(), info);
    }
    Ok(())
}
