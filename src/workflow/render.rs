use super::fields::Fields;

/// Render the manifest text for sanitized fields.
pub fn render(fields: &Fields) -> String {
    format!(
        r#"(package "{name}"
         "{version}"
         "{description}")

(website-url "{website_url}")
(keywords "{keywords}")

(package-file "{entry_point}")

(script "test" "echo \"Error: no test specified\" && exit 1")

(source "gnu")

(depends-on "emacs" "{emacs_version}")
"#,
        name = fields.name,
        version = fields.version,
        description = fields.description,
        website_url = fields.website_url,
        keywords = fields.keywords,
        entry_point = fields.entry_point,
        emacs_version = fields.emacs_version,
    )
}
