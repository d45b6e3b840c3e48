//! Word-compatible HTML document export
//!
//! Produces an HTML document with the MS-Office namespace header that Word
//! opens as a `.doc` file. The body carries the cover page followed by every
//! chapter in order, separated by horizontal rules.

use crate::core::state::AppState;
use crate::entities::CoverPage;

/// Default export file name
pub const WORD_FILE_NAME: &str = "thesis_draft.doc";

const DOC_HEADER: &str = "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'>\
<head><meta charset='utf-8'><title>Thesis</title></head><body>";

const DOC_FOOTER: &str = "</body></html>";

/// Build the full document text
///
/// Deterministic for a given state and year; the caller supplies the year so
/// export output is reproducible in tests.
pub fn build_document(state: &AppState, year: i32) -> String {
    let mut doc = String::from(DOC_HEADER);
    doc.push_str(&cover_section(&state.cover_page, year));
    for chapter in &state.chapters {
        doc.push_str(&format!("<h2>{}</h2>", chapter.title));
        doc.push_str(&format!("<p>{}</p><br><hr><br>", chapter_body(&chapter.content)));
    }
    doc.push_str(DOC_FOOTER);
    doc
}

fn cover_section(cover: &CoverPage, year: i32) -> String {
    format!(
        "<div style='text-align:center; page-break-after:always;'>\
<h2>{university}</h2>\
<h3>{college}</h3>\
<br><br><br>\
<h1 style='border:2px solid black; padding:20px; display:inline-block;'>Thesis Title</h1>\
<br><br><br>\
<h3>Prepared by: {student}</h3>\
<h3>Supervised by: {supervisor}</h3>\
<br><br>\
<h4>{year}</h4>\
</div>",
        university = cover.university,
        college = cover.college,
        student = cover.student,
        supervisor = cover.supervisor,
        year = year,
    )
}

/// Substitute heading markers in chapter text
///
/// Only `# ` and `## ` are substituted, matched at line start with the longer
/// marker first. `### ` and `- ` lines pass through as literal text; no HTML
/// escaping is applied. This mirrors what the preview renderer supports minus
/// the two block kinds Word handles poorly inline.
fn chapter_body(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("## ") {
                format!("<h2>{}</h2>", rest)
            } else if let Some(rest) = line.strip_prefix("# ") {
                format!("<h1>{}</h1>", rest)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
