//! Paginated document encoding
//!
//! A brief is laid out as a cover page followed by the body. The cover has no
//! page furniture; from page 2 onward a running header shows the logo in the
//! top-left corner. Without a logo the layout is otherwise unchanged.

mod fonts;
mod layout;
mod logo;
mod writer;

pub use logo::Logo;

use crate::error::Result;
use crate::provenance::{Provenance, COPYRIGHT_NOTICE};
use clerk_domain::{AssembledBrief, BriefField};
use fonts::Font;
use layout::{paginate, Align, DrawOp, Flowable, Frame, Rgb, Style};
use writer::{DocumentInfo, PageTemplate};

const INCH: f32 = 72.0;

/// US Letter
const PAGE_WIDTH: f32 = 8.5 * INCH;
const PAGE_HEIGHT: f32 = 11.0 * INCH;
const MARGIN: f32 = INCH;

const COVER_LOGO_HEIGHT: f32 = 2.0 * INCH;
const HEADER_LOGO_HEIGHT: f32 = 0.85 * INCH;
const HEADER_MARGIN: f32 = 0.25 * INCH;

const DOCUMENT_TITLE: &str = "LexEmetica Case Brief";
const COVER_SUBTITLE: &str = "\u{2013} CASE BRIEF \u{2013}";

const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
const BURGUNDY: Rgb = Rgb::hex(0x800020);
const NAVY: Rgb = Rgb::hex(0x000080);
const GREY: Rgb = Rgb::hex(0x808080);

const BODY: Style = Style {
    font: Font::Roman,
    size: 11.0,
    leading: 14.0,
    color: BLACK,
    align: Align::Left,
    space_before: 0.0,
    space_after: 6.0,
};

const HEADING: Style = Style {
    font: Font::Bold,
    size: 13.0,
    leading: 15.6,
    color: NAVY,
    align: Align::Left,
    space_before: 10.0,
    space_after: 6.0,
};

const TITLE: Style = Style {
    font: Font::Bold,
    size: 20.0,
    leading: 24.0,
    color: BURGUNDY,
    align: Align::Center,
    space_before: 0.0,
    space_after: 10.0,
};

const COVER_HEADING: Style = Style {
    space_after: 6.0,
    ..TITLE
};

const COVER_META: Style = Style {
    font: Font::Roman,
    size: 14.0,
    leading: 18.0,
    color: BLACK,
    align: Align::Center,
    space_before: 0.0,
    space_after: 0.0,
};

const DISCLOSURE: Style = Style {
    font: Font::Italic,
    size: 9.0,
    leading: 12.0,
    color: GREY,
    align: Align::Left,
    space_before: 12.0,
    space_after: 12.0,
};

fn frame() -> Frame {
    Frame {
        left: MARGIN,
        bottom: MARGIN,
        width: PAGE_WIDTH - 2.0 * MARGIN,
        top: PAGE_HEIGHT - MARGIN,
    }
}

fn paragraph(text: impl Into<String>, style: Style) -> Flowable {
    Flowable::Paragraph {
        text: text.into(),
        style,
    }
}

fn cover_page(brief: &AssembledBrief, logo: Option<&Logo>) -> Vec<Flowable> {
    let mut story = vec![Flowable::Spacer(1.35 * INCH)];
    if let Some(logo) = logo {
        story.push(Flowable::Logo {
            width: logo.width_for_height(COVER_LOGO_HEIGHT),
            height: COVER_LOGO_HEIGHT,
        });
    }
    story.extend([
        Flowable::Spacer(0.5 * INCH),
        paragraph(brief.title(), TITLE),
        Flowable::Spacer(0.2 * INCH),
        paragraph(COVER_SUBTITLE, COVER_HEADING),
        Flowable::Spacer(0.5 * INCH),
        paragraph(
            format!("Citation: {}", brief.get(BriefField::Citation)),
            COVER_META,
        ),
        paragraph(
            format!("Docket No.: {}", brief.get(BriefField::DocketNumber)),
            COVER_META,
        ),
        paragraph(
            format!("Date Filed: {}", brief.get(BriefField::DateFiled)),
            COVER_META,
        ),
        Flowable::Spacer(0.5 * INCH),
        Flowable::Rule {
            width_fraction: 0.85,
            thickness: 4.0,
            color: BURGUNDY,
            space_before: 12.0,
            space_after: 24.0,
        },
        Flowable::PageBreak,
    ]);
    story
}

fn body(brief: &AssembledBrief, provenance: &Provenance) -> Vec<Flowable> {
    let mut story = vec![
        paragraph(format!("{} \u{2013} Case Brief", brief.title()), TITLE),
        Flowable::Rule {
            width_fraction: 0.85,
            thickness: 2.0,
            color: BURGUNDY,
            space_before: 4.0,
            space_after: 20.0,
        },
    ];

    for (field, value) in brief.iter() {
        story.push(paragraph(format!("{}:", field.title()), HEADING));
        story.push(paragraph(value, BODY));
    }

    story.push(Flowable::Spacer(0.5 * INCH));
    story.push(paragraph(closing_text(provenance), DISCLOSURE));
    story
}

fn closing_text(provenance: &Provenance) -> String {
    format!(
        "{}\n\nDisclosure:\n{}\n\n{}",
        provenance.generation_note(),
        provenance.disclosure(),
        COPYRIGHT_NOTICE
    )
}

fn no_header(_logo: Option<&Logo>) -> Vec<DrawOp> {
    Vec::new()
}

fn logo_header(logo: Option<&Logo>) -> Vec<DrawOp> {
    logo.map(|logo| DrawOp::Logo {
        x: HEADER_MARGIN,
        y: PAGE_HEIGHT - HEADER_MARGIN - HEADER_LOGO_HEIGHT,
        width: logo.width_for_height(HEADER_LOGO_HEIGHT),
        height: HEADER_LOGO_HEIGHT,
    })
    .into_iter()
    .collect()
}

/// Cover page without furniture, running logo header afterwards
const BRIEF_TEMPLATE: PageTemplate = PageTemplate {
    first_page: no_header,
    later_pages: logo_header,
};

/// Render `brief` as a complete PDF file
pub fn render(
    brief: &AssembledBrief,
    provenance: &Provenance,
    logo: Option<&Logo>,
) -> Result<Vec<u8>> {
    let mut story = cover_page(brief, logo);
    story.extend(body(brief, provenance));

    let pages = paginate(frame(), &story);
    tracing::debug!(pages = pages.len(), "Laid out brief");

    writer::write(
        &pages,
        logo,
        BRIEF_TEMPLATE,
        &DocumentInfo {
            title: DOCUMENT_TITLE,
            producer: "LexEmetica Clerk",
            media_box: [PAGE_WIDTH, PAGE_HEIGHT],
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clerk_domain::CaseMetadata;
    use lopdf::content::Content;
    use lopdf::Document;

    fn sample_brief(facts: &str) -> AssembledBrief {
        let metadata = CaseMetadata::default();
        let mut values: [String; 15] = Default::default();
        for (value, field) in values.iter_mut().zip(BriefField::ORDER) {
            *value = format!("{} text", field.title());
        }
        values[0] = "Gideon v. Wainwright".to_string();
        values[1] = "372 U.S. 335".to_string();
        values[2] = "1963-03-18".to_string();
        values[3] = metadata.docket_number;
        values[9] = facts.to_string();
        AssembledBrief::from_values(values)
    }

    fn operators(doc: &Document, page: u32) -> Vec<String> {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&page]).unwrap();
        Content::decode(&content)
            .unwrap()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    fn shown_text(doc: &Document, page: u32) -> Vec<u8> {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&page]).unwrap();
        Content::decode(&content)
            .unwrap()
            .operations
            .into_iter()
            .filter(|op| op.operator == "Tj")
            .flat_map(|op| op.operands[0].as_str().unwrap().to_vec())
            .collect()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn logo() -> Logo {
        Logo::from_bytes(&logo::tests::png_bytes(255)).unwrap()
    }

    #[test]
    fn test_cover_then_body() {
        let bytes =
            render(&sample_brief("Gideon was charged."), &Provenance::at("now"), None).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() >= 2);

        let cover = shown_text(&doc, 1);
        assert!(contains(&cover, b"Gideon v. Wainwright (1963)"));
        assert!(contains(&cover, b"Citation: 372 U.S. 335"));
        assert!(contains(&cover, &[0x96, b' ', b'C', b'A', b'S', b'E']));
        assert!(!contains(&cover, b"Facts:"));

        let body = shown_text(&doc, 2);
        assert!(contains(&body, b"Case Brief"));
        assert!(contains(&body, b"Facts:"));
        assert!(contains(&body, b"Gideon was charged."));
    }

    /// x offsets of every image placement on a page
    fn image_positions(doc: &Document, page: u32) -> Vec<f32> {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&page]).unwrap();
        Content::decode(&content)
            .unwrap()
            .operations
            .into_iter()
            .filter(|op| op.operator == "cm")
            .map(|op| op.operands[4].as_float().unwrap())
            .collect()
    }

    #[test]
    fn test_header_only_after_cover() {
        let bytes = render(
            &sample_brief("Facts."),
            &Provenance::at("now"),
            Some(&logo()),
        )
        .unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        // Page 1 carries the centred cover logo and no header
        let cover = image_positions(&doc, 1);
        assert_eq!(cover.len(), 1);
        assert!(cover[0] > MARGIN);

        let later = image_positions(&doc, 2);
        assert_eq!(later, vec![HEADER_MARGIN]);
    }

    #[test]
    fn test_no_logo_no_images() {
        let bytes = render(&sample_brief("Facts."), &Provenance::at("now"), None).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        for page in doc.get_pages().keys() {
            assert!(!operators(&doc, *page).iter().any(|o| o == "Do"));
        }
    }

    #[test]
    fn test_long_brief_repeats_header() {
        let facts = "The petitioner was charged in a Florida state court. ".repeat(400);
        let bytes = render(
            &sample_brief(&facts),
            &Provenance::at("now"),
            Some(&logo()),
        )
        .unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let count = doc.get_pages().len() as u32;
        assert!(count >= 4);
        for page in 2..=count {
            assert!(operators(&doc, page).iter().any(|o| o == "Do"));
        }
    }

    #[test]
    fn test_closing_block() {
        let bytes = render(
            &sample_brief("Facts."),
            &Provenance::at("March 18, 1963 at 10:00 AM (+00:00)"),
            None,
        )
        .unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let text: Vec<u8> = (2..=doc.get_pages().len() as u32)
            .flat_map(|page| shown_text(&doc, page))
            .collect();
        assert!(contains(&text, b"March 18, 1963 at 10:00 AM"));
        assert!(contains(&text, b"Disclosure:"));
        assert!(contains(&text, &[0xA9]));
    }
}
