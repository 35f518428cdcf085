//! Serialization of laid-out pages into a PDF document

use super::fonts::{encode_win_ansi, Font};
use super::layout::{DrawOp, Page, Rgb};
use super::logo::Logo;
use crate::error::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// XObject name of the logo in page resources
const LOGO_RESOURCE: &str = "Im1";

/// Draws page furniture beneath the flowed content of a page
pub type Decorator = fn(Option<&Logo>) -> Vec<DrawOp>;

/// Page furniture for the first page and for every page after it
#[derive(Clone, Copy)]
pub struct PageTemplate {
    pub first_page: Decorator,
    pub later_pages: Decorator,
}

/// Document-level settings
pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub producer: &'a str,
    pub media_box: [f32; 2],
}

/// Write `pages` as a complete PDF file
pub fn write(
    pages: &[Page],
    logo: Option<&Logo>,
    template: PageTemplate,
    info: &DocumentInfo<'_>,
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let mut resources = dictionary! { "Font" => fonts };
    if let Some(logo) = logo {
        let image_id = logo.add_to(&mut doc);
        resources.set("XObject", dictionary! { LOGO_RESOURCE => image_id });
    }
    let resources_id = doc.add_object(resources);

    let mut kids = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let decorate = if index == 0 {
            template.first_page
        } else {
            template.later_pages
        };
        let furniture = decorate(logo);
        let content: Content<Vec<Operation>> = Content {
            operations: furniture
                .iter()
                .chain(page.ops.iter())
                .flat_map(operations)
                .collect(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    let [width, height] = info.media_box;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(info.title),
        "Producer" => Object::string_literal(info.producer),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    vec![color.0.into(), color.1.into(), color.2.into()]
}

fn operations(op: &DrawOp) -> Vec<Operation> {
    match op {
        DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text,
        } => vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), (*size).into()]),
            Operation::new("rg", color_operands(*color)),
            Operation::new("Td", vec![(*x).into(), (*y).into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ],
        DrawOp::Line {
            x1,
            x2,
            y,
            thickness,
            color,
        } => vec![
            Operation::new("q", vec![]),
            Operation::new("w", vec![(*thickness).into()]),
            Operation::new("J", vec![1.into()]),
            Operation::new("RG", color_operands(*color)),
            Operation::new("m", vec![(*x1).into(), (*y).into()]),
            Operation::new("l", vec![(*x2).into(), (*y).into()]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ],
        DrawOp::Logo {
            x,
            y,
            width,
            height,
        } => vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (*width).into(),
                    0.into(),
                    0.into(),
                    (*height).into(),
                    (*x).into(),
                    (*y).into(),
                ],
            ),
            Operation::new("Do", vec![LOGO_RESOURCE.into()]),
            Operation::new("Q", vec![]),
        ],
    }
}
