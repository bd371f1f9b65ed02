use pulldown_cmark::{html, Event, Options, Parser};

#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    // Raw HTML in articles is shown as text, never injected
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Inline article shown when an info page cannot be loaded
#[must_use]
pub fn error_article(heading: &str) -> String {
    format!("# {heading}\nCould not load content.")
}
