use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::AppError;

/// Conventional asset-catalog location of the app icon, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "Assets.xcassets/AppIcon.appiconset";

/// Source images probed, in order, when none is given on the command line.
pub fn default_candidates(base_dir: &Path, asset_dir: &Path) -> Vec<PathBuf> {
    vec![
        base_dir.join("icon.png"),
        asset_dir.join("icon_512x512@2x.png"),
        asset_dir.join("icon_512x512.png"),
    ]
}

/// Picks the source image: the explicit path if given, else the first existing candidate.
pub fn resolve_source(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<PathBuf, AppError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => candidates
            .iter()
            .inspect(|candidate| debug!("Probing source candidate {:?}", candidate))
            .find(|candidate| candidate.exists())
            .cloned()
            .ok_or_else(|| AppError::NoSourceImage {
                candidates: candidates.to_vec(),
            })?,
    };

    if !path.exists() {
        return Err(AppError::SourceNotFound { path });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn explicit_path_wins_over_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("mine.png");
        touch(&explicit);
        let candidates = default_candidates(dir.path(), &dir.path().join(DEFAULT_ASSET_DIR));
        touch(&candidates[0]);

        let resolved = resolve_source(Some(&explicit), &candidates).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn missing_explicit_path_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("missing.png");
        let candidates = default_candidates(dir.path(), &dir.path().join(DEFAULT_ASSET_DIR));
        touch(&candidates[0]);

        let err = resolve_source(Some(&explicit), &candidates).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound { ref path } if *path == explicit));
        assert!(err.hint().is_some());
    }

    #[test]
    fn candidates_are_probed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let asset_dir = dir.path().join(DEFAULT_ASSET_DIR);
        let candidates = default_candidates(dir.path(), &asset_dir);

        touch(&candidates[2]);
        assert_eq!(resolve_source(None, &candidates).unwrap(), candidates[2]);

        touch(&candidates[1]);
        assert_eq!(resolve_source(None, &candidates).unwrap(), candidates[1]);

        touch(&candidates[0]);
        assert_eq!(resolve_source(None, &candidates).unwrap(), candidates[0]);
    }

    #[test]
    fn no_candidate_is_no_source_image() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = default_candidates(dir.path(), &dir.path().join(DEFAULT_ASSET_DIR));

        let err = resolve_source(None, &candidates).unwrap_err();
        match &err {
            AppError::NoSourceImage { candidates: listed } => assert_eq!(listed, &candidates),
            other => panic!("unexpected error: {other}"),
        }
        let hint = err.hint().unwrap();
        assert!(hint.contains("icon_512x512@2x.png"));
    }
}
