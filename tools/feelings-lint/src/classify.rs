use std::path::{Component, Path};

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];
const COMPONENT_EXTENSIONS: &[&str] = &["jsx", "tsx"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

/// Which rule subset a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Script or markup source. `component` is set for JSX/TSX files that
    /// live somewhere below a `components` directory.
    Source { component: bool },
    /// Image asset under `public/images`.
    Image,
    Ignored,
}

/// Classify a path relative to the project root.
pub fn classify(rel_path: &Path) -> FileKind {
    let Some(ext) = rel_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
    else {
        return FileKind::Ignored;
    };

    if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
        let component =
            COMPONENT_EXTENSIONS.contains(&ext.as_str()) && has_dir(rel_path, &["components"]);
        FileKind::Source { component }
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) && has_dir(rel_path, &["public", "images"]) {
        FileKind::Image
    } else {
        FileKind::Ignored
    }
}

/// Whether `dirs` appears as a run of consecutive parent directories.
fn has_dir(path: &Path, dirs: &[&str]) -> bool {
    let parents: Vec<&str> = path
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    parents.windows(dirs.len()).any(|w| w == dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_source_files() {
        assert_eq!(
            classify(Path::new("app/test/page.tsx")),
            FileKind::Source { component: false }
        );
        assert_eq!(
            classify(Path::new("lib/animations.ts")),
            FileKind::Source { component: false }
        );
        assert_eq!(
            classify(Path::new("components/emotional/WhisperHero.tsx")),
            FileKind::Source { component: true }
        );
    }

    #[test]
    fn plain_scripts_under_components_are_not_components() {
        assert_eq!(
            classify(Path::new("components/ui/helpers.ts")),
            FileKind::Source { component: false }
        );
    }

    #[test]
    fn component_dir_must_be_a_whole_name() {
        assert_eq!(
            classify(Path::new("app/mycomponents/Card.tsx")),
            FileKind::Source { component: false }
        );
    }

    #[test]
    fn images_only_under_public_images() {
        assert_eq!(classify(Path::new("public/images/sunset.jpg")), FileKind::Image);
        assert_eq!(classify(Path::new("public/images/hero/SUNSET.JPG")), FileKind::Image);
        assert_eq!(classify(Path::new("app/sunset.jpg")), FileKind::Ignored);
        assert_eq!(classify(Path::new("public/sunset.png")), FileKind::Ignored);
    }

    #[test]
    fn other_files_are_ignored() {
        assert_eq!(classify(Path::new("app/globals.css")), FileKind::Ignored);
        assert_eq!(classify(Path::new("lib/README")), FileKind::Ignored);
    }
}
