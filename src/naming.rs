use std::path::Path;

/// Filename prefixes accepted for a manifest, longest first.
const MANIFEST_PREFIXES: [&str; 2] = ["Easkfile", "Eask"];

/// Guess the package name from the working directory's base name.
///
/// Lower-cases the name, removes every `emacs-` and `-emacs` occurrence and
/// then a trailing `-el` / `.el`. The rules are reapplied until nothing
/// changes, so the result is always a fixed point. This differs from a
/// single pass on names that still match afterwards: `foo-el-el` gives
/// `foo` rather than `foo-el`, and `emaemacs-cs-foo` gives `foo`.
pub fn infer_package_name(dir_name: &str) -> String {
    let mut name = dir_name.to_lowercase();
    loop {
        let next = normalize_once(&name);
        if next == name {
            return name;
        }
        name = next;
    }
}

fn normalize_once(name: &str) -> String {
    let mut name = name.replace("emacs-", "").replace("-emacs", "");
    if name.ends_with("-el") || name.ends_with(".el") {
        name.truncate(name.len() - 3);
    }
    name
}

/// Guess the entry point filename from the working directory's base name.
pub fn infer_entry_point(dir_name: &str) -> String {
    format!("{}.el", infer_package_name(dir_name))
}

/// Return true if `candidate` is an acceptable manifest filename.
///
/// Only the final path component is inspected. Valid names are `Eask` or
/// `Easkfile`, optionally followed by a `.<digit>` suffix (`Eask.1`,
/// `Easkfile.3`).
pub fn is_valid_manifest_name(candidate: &str) -> bool {
    let Some(base) = Path::new(candidate).file_name().and_then(|b| b.to_str()) else {
        return false;
    };

    let Some(rest) = MANIFEST_PREFIXES
        .iter()
        .find_map(|prefix| base.strip_prefix(prefix))
    else {
        return false;
    };

    let mut chars = rest.chars();
    match chars.next() {
        None => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        Some(_) => false,
    }
}

/// Remove every double-quote character.
pub fn strip_double_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Split keywords on runs of commas and spaces, joined so that the result
/// renders as separate quoted strings inside `(keywords "...")`.
pub fn join_keywords(keywords: &str) -> String {
    keywords
        .split([',', ' '])
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join("\" \"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_package_name() {
        assert_eq!(infer_package_name("emacs-foo-el"), "foo");
        assert_eq!(infer_package_name("Magit"), "magit");
        assert_eq!(infer_package_name("company-emacs"), "company");
        assert_eq!(infer_package_name("dash.el"), "dash");
        assert_eq!(infer_package_name("lsp-mode"), "lsp-mode");
    }

    #[test]
    fn test_infer_package_name_replaces_everywhere() {
        assert_eq!(infer_package_name("my-emacs-emacs-config"), "my-config");
        assert_eq!(infer_package_name("EMACS-Helm"), "helm");
        assert_eq!(infer_package_name("foo-el-el"), "foo");
        assert_eq!(infer_package_name("emaemacs-cs-foo"), "foo");
    }

    #[test]
    fn test_infer_package_name_is_idempotent() {
        for name in ["emacs-foo-el", "foo-el-el", "Emacs-Emacs-Bar.el", "x", ""] {
            let once = infer_package_name(name);
            assert_eq!(infer_package_name(&once), once, "input: {name}");
        }
    }

    #[test]
    fn test_infer_entry_point() {
        assert_eq!(infer_entry_point("emacs-foo-el"), "foo.el");
        for name in ["emacs-foo-el", "Magit", "dash.el"] {
            assert_eq!(
                infer_entry_point(name),
                format!("{}.el", infer_package_name(name))
            );
        }
    }

    #[test]
    fn test_is_valid_manifest_name() {
        assert!(is_valid_manifest_name("Eask"));
        assert!(is_valid_manifest_name("Easkfile"));
        assert!(is_valid_manifest_name("Eask.1"));
        assert!(is_valid_manifest_name("Easkfile.3"));
        assert!(!is_valid_manifest_name("Eask2"));
        assert!(!is_valid_manifest_name("foo"));
        assert!(!is_valid_manifest_name("Eask."));
        assert!(!is_valid_manifest_name("Easkfile.x"));
        assert!(!is_valid_manifest_name(""));
    }

    #[test]
    fn test_is_valid_manifest_name_ignores_directories() {
        assert!(is_valid_manifest_name("some/dir/Eask.2"));
        assert!(!is_valid_manifest_name("Eask/foo"));
    }

    #[test]
    fn test_strip_double_quotes() {
        assert_eq!(strip_double_quotes(r#"He said "hi""#), "He said hi");
        assert_eq!(strip_double_quotes("plain"), "plain");
    }

    #[test]
    fn test_join_keywords() {
        assert_eq!(join_keywords(""), "");
        assert_eq!(join_keywords("tools"), "tools");
        assert_eq!(join_keywords("tools, lisp  convenience"), r#"tools" "lisp" "convenience"#);
        assert_eq!(join_keywords(",a,,b "), r#"a" "b"#);
        assert_eq!(join_keywords("tools, "), "tools");
    }
}
