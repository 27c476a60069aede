//! Assembles the final HTML page around the converted body.

use crate::error::ConvertError;
use crate::patch::{apply_rules, BODY_RULES};
use std::fs;
use std::path::Path;

/// Closing markup, with some trailing space below the content.
pub const FOOTER: &str = "<br/><br/><br/><br/><br/>\n</body>\n</html>";

/// Opening markup with the code-block stylesheet and a versioned title.
pub fn header(version: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>SPAdes {version} Manual</title>
    <style type="text/css">
        .highlight pre {{
            background-color: #f0f2f4;
            border-radius: 2px;
            font-size: 100%;
            line-height: 1.45;
            overflow: auto;
            padding: 16px;
        }}
    </style>
</head>
<body>"#
    )
}

/// Builds the complete page: header, patched body, footer and a final newline.
pub fn assemble(body: &str, version: &str) -> String {
    let mut page = header(version);
    page.push_str(&apply_rules(body, BODY_RULES));
    page.push_str(FOOTER);
    page.push('\n');
    page
}

/// Writes an assembled page to `path` as UTF-8.
pub fn write_document(path: &Path, page: &str) -> Result<(), ConvertError> {
    fs::write(path, page).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use insta::assert_snapshot;

    #[test]
    fn header_carries_version_in_title() {
        let header = header("3.15.5");
        assert!(header.starts_with("<html>"));
        assert!(header.contains("<title>SPAdes 3.15.5 Manual</title>"));
        assert!(header.contains(".highlight pre {"));
        assert!(header.ends_with("<body>"));
    }

    #[test]
    fn assemble_wraps_patched_body() {
        let page = assemble("<p>a<br><br>b</p>", "1.0");
        assert!(page.starts_with(&header("1.0")));
        assert!(page.contains("<p>a<br>b</p>"));
        assert!(page.ends_with(&format!("{FOOTER}\n")));
    }

    #[test]
    fn assemble_injects_meta_only_for_exact_heading() {
        let with = assemble("<p><strong>SPAdes</strong> manual</p>", "1.0");
        let without = assemble("<p><strong>Other</strong> manual</p>", "1.0");

        assert!(with.contains(r#"<meta charset="UTF-8">"#));
        assert!(!without.contains("<meta charset"));
    }

    #[test]
    fn footer_markup() {
        assert_snapshot!(FOOTER.replace('\n', " "), @"<br/><br/><br/><br/><br/> </body> </html>");
    }

    #[test]
    fn write_document_writes_utf8() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.child("manual.html");

        write_document(output.path(), "<p>Ünïcode</p>\n").unwrap();

        output.assert("<p>Ünïcode</p>\n");
    }

    #[test]
    fn write_document_reports_unwritable_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.path().join("missing-dir").join("manual.html");

        let err = write_document(&output, "x").unwrap_err();
        assert!(matches!(err, ConvertError::WriteOutput { .. }));
    }
}
