//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Write;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;

/// Write a ZIP container with `entries` (name, content) in the given order.
pub fn build_epub(entries: &[(&str, &str)]) -> NamedTempFile {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        zip.start_file(*name, options).expect("start zip entry");
        zip.write_all(content.as_bytes()).expect("write zip entry");
    }
    let bytes = zip.finish().expect("finish zip").into_inner();

    let mut file = tempfile::Builder::new()
        .suffix(".epub")
        .tempfile()
        .expect("create temp epub");
    file.write_all(&bytes).expect("write temp epub");
    file
}

/// The smallest EPUB carrying one chapter of text.
pub fn sample_epub() -> NamedTempFile {
    build_epub(&[
        ("mimetype", "application/epub+zip"),
        (
            "content.xhtml",
            "<html><body><h1>Título</h1><p>Hola mundo</p></body></html>",
        ),
    ])
}

/// Write a PDF with one page per entry of `pages`, each showing its text in
/// Courier. Texts must be ASCII.
pub fn build_pdf(pages: &[&str]) -> NamedTempFile {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(page_tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("create temp pdf");
    doc.save_to(&mut file).expect("write temp pdf");
    file
}
