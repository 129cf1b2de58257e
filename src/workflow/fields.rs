use std::io::{BufRead, Write};

use crate::Result;
use crate::config::Defaults;
use crate::naming::{infer_entry_point, infer_package_name, join_keywords, strip_double_quotes};
use crate::prompt::PromptSession;

/// The metadata collected for a new manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub version: String,
    pub description: String,
    pub entry_point: String,
    pub emacs_version: String,
    pub website_url: String,
    pub keywords: String,
}

impl Fields {
    /// Remove double quotes from every field, then space-separate keywords.
    pub fn sanitize(self) -> Self {
        Self {
            name: strip_double_quotes(&self.name),
            version: strip_double_quotes(&self.version),
            description: strip_double_quotes(&self.description),
            entry_point: strip_double_quotes(&self.entry_point),
            emacs_version: strip_double_quotes(&self.emacs_version),
            website_url: strip_double_quotes(&self.website_url),
            keywords: join_keywords(&strip_double_quotes(&self.keywords)),
        }
    }
}

/// Ask for each field in turn. `dir_name` is the base name of the working
/// directory, used to guess the package name and entry point.
pub fn collect<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    dir_name: &str,
    defaults: &Defaults,
) -> Result<Fields> {
    let guessed_name = infer_package_name(dir_name);
    let guessed_entry = infer_entry_point(dir_name);

    let fields = Fields {
        name: ask_or(session, "package name:", Some(&guessed_name))?,
        version: ask_or(session, "version:", Some(&defaults.version))?,
        description: ask_or(session, "description:", None)?,
        entry_point: ask_or(session, "entry point:", Some(&guessed_entry))?,
        emacs_version: ask_or(session, "emacs version:", Some(&defaults.emacs_version))?,
        website_url: ask_or(session, "website:", None)?,
        keywords: ask_or(session, "keywords:", None)?,
    };

    Ok(fields.sanitize())
}

fn ask_or<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    let prompt = match default {
        Some(default) => format!("{} ({}) ", label, default),
        None => format!("{} ", label),
    };

    let answer = session.ask(&prompt)?;
    if answer.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_all_defaults() {
        let mut session = PromptSession::new(Cursor::new("\n".repeat(7)), Vec::new());
        let fields = collect(&mut session, "emacs-foo-el", &Defaults::default()).unwrap();

        assert_eq!(
            fields,
            Fields {
                name: "foo".to_string(),
                version: "1.0.0".to_string(),
                description: String::new(),
                entry_point: "foo.el".to_string(),
                emacs_version: "26.1".to_string(),
                website_url: String::new(),
                keywords: String::new(),
            }
        );

        let output = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(
            output,
            "package name: (foo) version: (1.0.0) description: entry point: (foo.el) \
emacs version: (26.1) website: keywords: "
        );
    }

    #[test]
    fn test_collect_answers_and_sanitizes() {
        let input = "bar\n2.0\nHe said \"hi\"\nlisp/bar.el\n28.2\nhttps://example.com\ntools, \"lisp\"\n";
        let mut session = PromptSession::new(Cursor::new(input), Vec::new());
        let fields = collect(&mut session, "whatever", &Defaults::default()).unwrap();

        assert_eq!(fields.name, "bar");
        assert_eq!(fields.version, "2.0");
        assert_eq!(fields.description, "He said hi");
        assert_eq!(fields.entry_point, "lisp/bar.el");
        assert_eq!(fields.emacs_version, "28.2");
        assert_eq!(fields.website_url, "https://example.com");
        assert_eq!(fields.keywords, "tools\" \"lisp");
    }

    #[test]
    fn test_collect_uses_configured_defaults() {
        let defaults = Defaults {
            version: "0.1.0".to_string(),
            emacs_version: "29.1".to_string(),
        };
        let mut session = PromptSession::new(Cursor::new("\n".repeat(7)), Vec::new());
        let fields = collect(&mut session, "pkg", &defaults).unwrap();

        assert_eq!(fields.version, "0.1.0");
        assert_eq!(fields.emacs_version, "29.1");
    }

    #[test]
    fn test_collect_input_closed_early() {
        let mut session = PromptSession::new(Cursor::new("foo\n"), Vec::new());
        let result = collect(&mut session, "pkg", &Defaults::default());
        assert!(matches!(result, Err(crate::Error::InputClosed)));
    }
}
