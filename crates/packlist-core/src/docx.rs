//! Reading paragraph text out of `.docx` files.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;

use crate::error::DocxError;

/// Extract body paragraph text from the raw bytes of a `.docx` file.
///
/// A `.docx` file is a ZIP archive; the document body lives in
/// `word/document.xml`. Returns one string per body-level paragraph, in
/// document order.
pub fn read_paragraphs(data: &[u8]) -> Result<Vec<String>, DocxError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| DocxError::Archive(e.to_string()))?;

    let xml = {
        let mut part = match archive.by_name("word/document.xml") {
            Ok(part) => part,
            Err(zip::result::ZipError::FileNotFound) => return Err(DocxError::MissingDocument),
            Err(e) => return Err(DocxError::Archive(e.to_string())),
        };
        let mut content = String::new();
        part.read_to_string(&mut content)?;
        content
    };

    parse_document_xml(&xml)
}

/// Walk the document XML and collect paragraph text.
///
/// Text runs inside a paragraph are concatenated; explicit tabs become
/// `'\t'` and line breaks `'\n'`. Paragraphs nested inside `w:tbl` are
/// skipped, so only body-level paragraphs are returned, which is where
/// the annexure lines live.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut table_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => current = Some(String::new()),
                b"w:t" => in_text = current.is_some(),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\t');
                    }
                }
                b"w:br" | b"w:cr" => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().map_err(|e| DocxError::Xml(e.to_string()))?;
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::Xml(e.to_string())),
            _ => {}
        }
    }

    debug!("read {} paragraphs", paragraphs.len());
    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
    <w:p><w:r><w:t>left</w:t><w:tab/><w:t>right</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell text</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p><w:r><w:t xml:space="preserve">A &amp; B</w:t></w:r></w:p>
    <w:p/>
  </w:body>
</w:document>"#;

    #[test]
    fn test_reads_body_paragraphs_in_order() {
        let paragraphs = read_paragraphs(&docx_bytes(DOCUMENT)).unwrap();
        assert_eq!(paragraphs[0], "First paragraph");
        assert_eq!(paragraphs[1], "left\tright");
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let paragraphs = read_paragraphs(&docx_bytes(DOCUMENT)).unwrap();
        assert!(paragraphs.iter().all(|p| p != "cell text"));
    }

    #[test]
    fn test_entities_are_unescaped() {
        let paragraphs = read_paragraphs(&docx_bytes(DOCUMENT)).unwrap();
        assert!(paragraphs.contains(&"A & B".to_string()));
    }

    #[test]
    fn test_not_a_zip_is_an_archive_error() {
        let err = read_paragraphs(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, DocxError::Archive(_)));
    }

    #[test]
    fn test_archive_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = read_paragraphs(&bytes).unwrap_err();
        assert!(matches!(err, DocxError::MissingDocument));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = "<w:document><w:body><w:p></w:tr></w:body></w:document>";
        let err = read_paragraphs(&docx_bytes(xml)).unwrap_err();
        assert!(matches!(err, DocxError::Xml(_)));
    }
}
