use super::*;

#[test]
fn markdown_renders_emphasis_and_lists() {
    let rendered = render_markdown_html("Spend **less** on:\n\n- dining\n- travel");
    assert!(rendered.contains("<strong>less</strong>"));
    assert!(rendered.contains("<li>dining</li>"));
}

#[test]
fn raw_html_is_dropped() {
    let rendered = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!rendered.contains("<script>"));
    assert!(rendered.contains("hello"));
}
