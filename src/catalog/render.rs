use crate::catalog::section::Catalog;
use crate::core::error::CatalogError;
use std::fmt::Write;

/// Render the catalog as plain text or pretty JSON
pub fn render(catalog: &Catalog, format: &str) -> Result<String, CatalogError> {
    match format {
        "text" => Ok(render_text(catalog)),
        "json" => Ok(serde_json::to_string_pretty(catalog)?),
        other => Err(CatalogError::UnsupportedFormat(other.to_string())),
    }
}

fn render_text(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(1024);

    for line in &catalog.header {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", line);
    }

    for section in &catalog.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "{}", section.description);
        for line in &section.lines {
            let _ = writeln!(out, "  {}", line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::section::Section;

    fn sample() -> Catalog {
        Catalog {
            header: vec!["Header".to_string()],
            sections: vec![Section {
                title: "1.- One".to_string(),
                description: "First".to_string(),
                lines: vec!["a".to_string(), "b".to_string()],
            }],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), "text").unwrap();
        assert_eq!(text, "Header\n\n1.- One\nFirst\n  a\n  b\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["header"][0], "Header");
        assert_eq!(value["sections"][0]["title"], "1.- One");
        assert_eq!(value["sections"][0]["lines"][1], "b");
    }

    #[test]
    fn test_render_unknown_format() {
        let err = render(&sample(), "yaml").unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(ref f) if f == "yaml"));
    }
}
