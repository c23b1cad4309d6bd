//! End-to-end conversion tests: OpenAPI JSON in, `.docx` archive out

use apidocx_core::{
    convert_file, package::DOCUMENT_PART, render::render, BlockStyle, DocxPackager, Language,
    TextBlock,
};
use apidocx_schemas::SpecDocument;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Read;
use tempfile::TempDir;
use zip::ZipArchive;

fn items_spec() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {"title": "Inventário", "version": "0.1.0"},
        "paths": {
            "/items": {
                "get": {
                    "summary": "List items",
                    "responses": {
                        "200": {
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["id"],
                                        "properties": {
                                            "id": {"type": "integer"},
                                            "name": {"type": "string"}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Body blocks following the heading `heading`, up to the next heading
fn section_text(blocks: &[TextBlock], heading: &str) -> String {
    let start = blocks
        .iter()
        .position(|b| b.style.is_heading() && b.text == heading)
        .unwrap_or_else(|| panic!("heading {heading:?} not rendered"));

    blocks[start + 1..]
        .iter()
        .take_while(|b| b.style == BlockStyle::Body)
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_part(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
        }
    }
}

#[test]
fn test_get_items_response_example() {
    let blocks = render(&SpecDocument::new(items_spec()));

    assert!(blocks.contains(&TextBlock::new("GET /items", BlockStyle::Heading3)));

    let example: Value = serde_json::from_str(&section_text(&blocks, "Response Example (200)")).unwrap();
    assert_eq!(example, json!({"id": 0, "name": "string"}));
}

#[test]
fn test_archive_has_exactly_four_parts() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("openapi.json");
    let output = temp_dir.path().join("nested").join("deeper").join("api.docx");
    fs::write(&input, serde_json::to_string(&items_spec()).unwrap()).unwrap();

    let summary = convert_file(&input, &output, Language::En).unwrap();
    assert_eq!(summary.operations, 1);
    assert_eq!(summary.bytes, fs::metadata(&output).unwrap().len());

    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
        ]
    );

    for name in ["[Content_Types].xml", "_rels/.rels", "word/_rels/document.xml.rels", DOCUMENT_PART] {
        assert_well_formed(&read_part(&mut archive, name));
    }

    let document = read_part(&mut archive, DOCUMENT_PART);
    assert!(document.contains("Inventário"));
    assert!(document.contains(r#"<w:pStyle w:val="Heading3"/></w:pPr><w:r><w:t xml:space="preserve">GET /items</w:t>"#));
}

#[test]
fn test_hostile_text_stays_well_formed() {
    let document = SpecDocument::new(json!({
        "info": {"title": "<script>&\"'</script>", "description": "bell\u{7} and tab\t"},
        "paths": {"/a": {"post": {
            "requestBody": {"content": {"application/json": {"schema": {
                "type": "object",
                "properties": {"emoji": {"type": "string"}, "naïve": {"type": "number"}}
            }}}}
        }}}
    }));

    let blocks = render(&document);
    let data = DocxPackager::new().to_bytes(&blocks).unwrap();
    let mut archive = ZipArchive::new(std::io::Cursor::new(data)).unwrap();

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART).unwrap().read_to_string(&mut xml).unwrap();

    assert_well_formed(&xml);
    assert!(xml.contains("&lt;script&gt;"));
    assert!(xml.contains("naïve"));
    assert!(!xml.contains('\u{7}'));
}

#[test]
fn test_request_and_response_with_shared_components() {
    let document = SpecDocument::new(json!({
        "security": [{"bearer": []}],
        "paths": {
            "/orders": {
                "post": {
                    "requestBody": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/Order"}}}},
                    "responses": {"201": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/Order"}}}}}
                }
            }
        },
        "components": {"schemas": {
            "Order": {
                "type": "object",
                "required": ["id", "placedAt"],
                "properties": {
                    "id": {"type": "integer"},
                    "placedAt": {"type": "string", "format": "date-time"},
                    "lines": {"type": "array", "items": {"$ref": "#/components/schemas/Line"}},
                    "signature": {"type": "string", "format": "byte"}
                }
            },
            "Line": {
                "type": "object",
                "properties": {"qty": {"type": "number"}, "order": {"$ref": "#/components/schemas/Order"}}
            }
        }}
    }));

    let blocks = render(&document);
    // Line sits at the depth limit, so its own fields come out empty
    let expected = json!({
        "id": 0,
        "placedAt": "2025-01-01T00:00:00Z",
        "lines": [{"qty": null, "order": null}],
        "signature": "BASE64=="
    });

    let request: Value = serde_json::from_str(&section_text(&blocks, "Request Example")).unwrap();
    let response: Value = serde_json::from_str(&section_text(&blocks, "Response Example (201)")).unwrap();
    assert_eq!(request, expected);
    assert_eq!(response, expected);
    assert!(blocks.contains(&TextBlock::new("Authentication", BlockStyle::Heading2)));
}

#[test]
fn test_missing_input_is_an_input_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = convert_file(
        &temp_dir.path().join("absent.json"),
        &temp_dir.path().join("out.docx"),
        Language::En,
    )
    .unwrap_err();

    assert!(err.is_input_error());
    assert!(!temp_dir.path().join("out.docx").exists());
}
