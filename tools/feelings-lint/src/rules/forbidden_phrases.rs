use super::Diagnostic;
use std::path::Path;

pub const RULE: &str = "forbidden-phrase";

/// Wording that reads as generic or transactional. Matched case-insensitively
/// anywhere in a source file.
pub const FORBIDDEN_PHRASES: &[&str] = &[
    "click here",
    "submit",
    "error",
    "loading...",
    "please wait",
    "required field",
    "invalid input",
    "book now",
    "hire us",
    "our services",
    "cheap",
    "discount",
    "IMG_",
    "DSC_",
    "photo1",
    "image1",
];

pub fn check(content: &str, path: &Path) -> Vec<Diagnostic> {
    let haystack = content.to_lowercase();

    FORBIDDEN_PHRASES
        .iter()
        .filter(|phrase| haystack.contains(&phrase.to_lowercase()))
        .map(|phrase| {
            Diagnostic::error(
                RULE,
                path,
                format!(
                    "Found \"{}\" in {} - use more soulful language",
                    phrase,
                    path.display()
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    #[test]
    fn finds_phrase_in_any_case() {
        let path = Path::new("app/test/page.tsx");
        for content in ["<button>\"Submit\"</button>", "SUBMIT", "sUbMiT"] {
            let diagnostics = check(content, path);
            assert_eq!(diagnostics.len(), 1, "content: {content}");
            assert_eq!(diagnostics[0].severity, Severity::Error);
            assert!(diagnostics[0].message.contains("\"submit\""));
            assert!(diagnostics[0].message.contains("app/test/page.tsx"));
        }
    }

    #[test]
    fn uppercase_camera_prefixes_are_caught() {
        let diagnostics = check("<Image src=\"/IMG_0042.jpg\" />", Path::new("app/page.tsx"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"IMG_\""));
    }

    #[test]
    fn reports_each_phrase_once() {
        let content = "Click here for a discount. click HERE again. Discount!";
        let diagnostics = check(content, Path::new("app/page.tsx"));
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn soulful_copy_passes() {
        let content = "Every photograph holds a whisper of who we were.";
        assert!(check(content, Path::new("app/page.tsx")).is_empty());
    }
}
