//! Shared document fixtures

use crate::{
    error::Result,
    tree::{Document, Section, Tag},
};

/// Markup produced by [`sample_document`]
pub const SAMPLE_MARKUP: &str = r#"<html>
<head>
    <title>hello</title>
</head>
<body>
    <h1 class="main-text">Test</h1>
    <div class="container container-fluid" id="lead" test_attr="random value">
        <p another_attr="test">another test</p>
        <img src="/icon.png" data-image="responsive"/>
    </div>
</body>
</html>"#;

/// Builds the reference document: a head with a title, and a body holding a
/// heading plus a container with a nested paragraph and a single image tag
pub fn sample_document() -> Result<Document> {
    let mut head = Section::new("head");
    head.append(Tag::new("title").with_text("hello"))?;

    let mut body = Section::new("body");
    body.append(Tag::new("h1").with_class("main-text").with_text("Test"))?;

    let mut div = Tag::new("div")
        .with_classes(["container", "container-fluid"])
        .with_attribute("id", "lead")
        .with_attribute("test_attr", "random value");
    div.append(
        Tag::new("p")
            .child_style()
            .with_attribute("another_attr", "test")
            .with_text("another test"),
    )?;
    div.append(
        Tag::single("img")
            .child_style()
            .with_attribute("src", "/icon.png"),
    )?;
    body.append(div)?;

    Ok(Document::new(head, body))
}
