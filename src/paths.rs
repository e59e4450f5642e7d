//! Path helpers for issue anchoring
//!
//! Issue paths are resolved purely lexically: the external tool has
//! already established which file it means, so no filesystem access or
//! symlink resolution happens here. Paths are folded (`.` and `..`
//! segments removed) and re-expressed relative to the working directory
//! that anchored the check.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path by dropping `.` segments and folding `..`
/// segments into the preceding component where possible
///
/// `..` segments that would ascend past the start of a relative path are
/// preserved; `..` at an absolute root is dropped.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {},
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                },
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`, ascending with `..` where needed
///
/// Both paths are expected to be absolute and already normalized. If they
/// share no common prefix, `path` is returned unchanged.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let mut path_iter = path.components();
    let mut base_iter = base.components();
    let mut comps: Vec<Component<'_>> = Vec::new();

    loop {
        match (path_iter.next(), base_iter.next()) {
            (None, None) => break,
            (Some(p), None) => {
                comps.push(p);
                comps.extend(path_iter.by_ref());
                break;
            },
            (None, Some(_)) => comps.push(Component::ParentDir),
            (Some(p), Some(b)) if comps.is_empty() && p == b => {},
            (Some(p), Some(Component::CurDir)) => comps.push(p),
            (Some(_), Some(Component::ParentDir)) => return path.to_path_buf(),
            (Some(p), Some(_)) => {
                comps.push(Component::ParentDir);
                for _ in base_iter.by_ref() {
                    comps.push(Component::ParentDir);
                }
                comps.push(p);
                comps.extend(path_iter.by_ref());
                break;
            },
        }
    }

    comps.iter().map(|comp| comp.as_os_str()).collect()
}
