#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use markgen::test_utils::*;

#[test]
fn empty_section_closes_itself() {
    let head = Section::new("head");
    assert_eq!(head.render(), "<head>\n</head>");
}

#[test]
fn section_wraps_appended_tag() -> Result<()> {
    let mut head = Section::new("head");
    head.append(Tag::new("title").with_text("hello"))?;

    assert_eq!(head.render(), "<head>\n    <title>hello</title>\n</head>");
    Ok(())
}

#[test]
fn section_accepts_single_tag() -> Result<()> {
    let mut body = Section::new("body");
    body.append(Tag::single("hr"))?;

    let markup = body.render();
    assert!(markup.contains("<hr data-image=\"responsive\"/>"));
    assert!(!markup.contains("</hr>"));
    Ok(())
}

#[test]
fn document_wraps_two_sections_in_order() {
    let document = Document::new(Section::new("head"), Section::new("body"));
    assert_eq!(
        document.render(),
        "<html>\n<head>\n</head>\n<body>\n</body>\n</html>"
    );
}

#[test]
fn document_display_matches_render() -> Result<()> {
    let document = sample_document()?;
    assert_eq!(document.to_string(), document.render());
    Ok(())
}

#[test]
fn document_render_is_idempotent() -> Result<()> {
    let document = sample_document()?;

    let first = document.render();
    let second = document.render();
    let third = document.render();
    assert_eq!(first, second);
    assert_eq!(second, third);
    Ok(())
}

#[test]
fn nested_markup_is_textually_contained() -> Result<()> {
    // document -> section -> container -> leaf
    let mut div = Tag::new("div").with_class("container");
    div.append(Tag::new("p").child_style().with_text("leaf"))?;

    let mut body = Section::new("body");
    body.append(div)?;

    let document = Document::new(Section::new("head"), body);
    let markup = document.render();

    let body_open = markup.find("<body>").unwrap();
    let div_open = markup.find("<div").unwrap();
    let leaf = markup.find("leaf").unwrap();
    let div_close = markup.find("</div>").unwrap();
    let body_close = markup.find("</body>").unwrap();

    assert!(body_open < div_open);
    assert!(div_open < leaf);
    assert!(leaf < div_close);
    assert!(div_close < body_close);
    Ok(())
}

#[test]
fn sample_document_renders_reference_markup() -> Result<()> {
    let document = sample_document()?;
    assert_eq!(document.render(), SAMPLE_MARKUP);
    Ok(())
}

#[test]
fn document_exposes_its_sections() -> Result<()> {
    let document = sample_document()?;

    assert_eq!(document.head().name(), "head");
    assert_eq!(document.body().name(), "body");
    assert!(document.body().has_children());
    Ok(())
}

#[test]
fn head_renders_before_body() -> Result<()> {
    let document = sample_document()?;
    let markup = document.render();

    let head = markup.find("<head>").unwrap();
    let body = markup.find("<body>").unwrap();
    assert!(head < body);
    Ok(())
}
