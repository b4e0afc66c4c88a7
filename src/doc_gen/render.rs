//! Markdown and JSON rendering of an operation catalog.

use crate::core::config::DocGenConfig;
use crate::core::errors::Result;

use super::OperationCatalog;

/// Render the catalog as the operations reference document.
pub fn render_markdown(catalog: &OperationCatalog, config: &DocGenConfig) -> String {
    let mut output = format!("# {}\n\n", config.title);
    let prefix = config.link_prefix.trim_end_matches('/');

    for section in catalog.sections.iter().filter(|s| !s.operations.is_empty()) {
        output.push_str(&format!("## {} Operations\n\n", section.category));
        output.push_str("| Operator | Source |\n");
        output.push_str("|----------|--------|\n");
        for record in &section.operations {
            output.push_str(&format!(
                "| `{}` | [source]({}/{}#L{}) |\n",
                record.operator, prefix, section.filename, record.line
            ));
        }
        output.push('\n');
    }

    output
}

/// Render the catalog as pretty-printed JSON.
pub fn render_json(catalog: &OperationCatalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc_gen::{CategorySection, OperationRecord};

    fn sample() -> OperationCatalog {
        OperationCatalog {
            sections: vec![
                CategorySection {
                    filename: "arithmetic.ts".into(),
                    category: "Arithmetic".into(),
                    operations: vec![
                        OperationRecord::new("$abs", 24),
                        OperationRecord::new("$add", 38),
                    ],
                },
                CategorySection {
                    filename: "string.ts".into(),
                    category: "String".into(),
                    operations: vec![OperationRecord::new("$concat", 7)],
                },
            ],
        }
    }

    #[test]
    fn markdown_layout_matches_reference_format() {
        let text = render_markdown(&sample(), &DocGenConfig::default());
        let expected = "\
# Available Operations

## Arithmetic Operations

| Operator | Source |
|----------|--------|
| `$abs` | [source](src/operations/arithmetic.ts#L24) |
| `$add` | [source](src/operations/arithmetic.ts#L38) |

## String Operations

| Operator | Source |
|----------|--------|
| `$concat` | [source](src/operations/string.ts#L7) |

";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_catalog_renders_title_only() {
        let text = render_markdown(&OperationCatalog::default(), &DocGenConfig::default());
        assert_eq!(text, "# Available Operations\n\n");
    }

    #[test]
    fn empty_sections_are_never_rendered() {
        let mut catalog = sample();
        catalog.sections.push(CategorySection {
            filename: "special.ts".into(),
            category: "Special".into(),
            operations: Vec::new(),
        });
        let text = render_markdown(&catalog, &DocGenConfig::default());
        assert!(!text.contains("Special"));
    }

    #[test]
    fn custom_title_and_prefix_are_used() {
        let mut config = DocGenConfig::default();
        config.title = "Operators".into();
        config.link_prefix = "lib/ops/".into();
        let text = render_markdown(&sample(), &config);
        assert!(text.starts_with("# Operators\n\n"));
        assert!(text.contains("[source](lib/ops/string.ts#L7)"));
    }

    #[test]
    fn json_lists_sections_and_records() -> Result<()> {
        let json = render_json(&sample())?;
        let parsed: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(parsed["sections"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["sections"][0]["operations"][1]["operator"], "$add");
        assert_eq!(parsed["sections"][1]["operations"][0]["line"], 7);
        Ok(())
    }
}
