//! Locating the annexure table inside document paragraphs.

use tracing::debug;

/// Banner line that opens the annexure block. The double space is part of
/// the layout.
const START_SENTINEL: &str = "********  INVOICE CUM PACKING LIST ANNEXURE ********";

/// Ruling line between the banner and the table itself.
const RULE_SENTINEL: &str = "====================";

/// Prefixes of letterhead, footer, and summary lines interleaved with the
/// table on every page.
const NOISE_PREFIXES: [&str; 9] = [
    "PAGE NO :",
    "|REGISTERED OFFICE:",
    "BOX ITEM TOTAL",
    "|MARUTI",
    "********",
    "|Plot No.",
    "|Vasant Kunj",
    "|Pan",
    "|DECLARATION",
];

/// Scan document paragraphs for the annexure table and return its lines
/// joined with newlines.
///
/// Nothing is emitted until the start banner and a following ruling line
/// have both been seen, in that order. Ruling lines repeat at page breaks
/// and are skipped wherever they occur; so is every line starting with a
/// known noise prefix. If the banner never appears the result is an empty
/// string, not an error.
pub fn extract<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found_start = false;
    let mut found_marker = false;
    let mut lines: Vec<String> = Vec::new();

    for paragraph in paragraphs {
        let text = paragraph.as_ref().trim();
        if text.contains(START_SENTINEL) {
            found_start = true;
        }
        if found_start && text.contains(RULE_SENTINEL) {
            found_marker = true;
            continue;
        }
        if found_marker && !NOISE_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
            lines.push(text.to_string());
        }
    }

    debug!("extracted {} annexure lines", lines.len());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annexure_paragraphs() -> Vec<&'static str> {
        vec![
            "MARUTI SUZUKI INDIA LIMITED",
            "|REGISTERED OFFICE: 1, Nelson Mandela Road",
            "********  INVOICE CUM PACKING LIST ANNEXURE ********",
            "  ====================  ",
            "|SNO |ORDER REF NO|ITEM CODE|",
            "|1   |70023954    |91111M66R|",
            "PAGE NO : 2",
            "====================",
            "|2   |70023954    |84701M55R|",
            "BOX ITEM TOTAL 450",
            "|DECLARATION: we hereby certify",
        ]
    }

    #[test]
    fn test_extract_keeps_table_lines_in_order() {
        let text = extract(annexure_paragraphs());
        assert_eq!(
            text,
            "|SNO |ORDER REF NO|ITEM CODE|\n|1   |70023954    |91111M66R|\n|2   |70023954    |84701M55R|"
        );
    }

    #[test]
    fn test_extract_without_start_sentinel_is_empty() {
        let paragraphs = vec!["====================", "|SNO |ITEM CODE|", "|1 |91111M66R|"];
        assert_eq!(extract(paragraphs), "");
    }

    #[test]
    fn test_extract_without_ruling_is_empty() {
        let paragraphs = vec![
            "********  INVOICE CUM PACKING LIST ANNEXURE ********",
            "|SNO |ITEM CODE|",
        ];
        assert_eq!(extract(paragraphs), "");
    }

    #[test]
    fn test_nothing_before_the_ruling_is_extracted() {
        let paragraphs = vec![
            "|1 |SMUGGLED DATA|",
            "********  INVOICE CUM PACKING LIST ANNEXURE ********",
            "====================",
            "|2 |REAL DATA|",
        ];
        assert_eq!(extract(paragraphs), "|2 |REAL DATA|");
    }

    #[test]
    fn test_repeated_rulings_are_skipped() {
        let text = extract(annexure_paragraphs());
        assert!(!text.contains("===="));
    }

    #[test]
    fn test_noise_prefixes_are_dropped() {
        let text = extract(annexure_paragraphs());
        assert!(!text.contains("PAGE NO :"));
        assert!(!text.contains("BOX ITEM TOTAL"));
        assert!(!text.contains("DECLARATION"));
    }
}
