use chat_render::render::{ escape_html, render, render_through };

#[test]
fn script_tags_are_never_live() {
    let inputs = [
        "<script>alert(1)</script>",
        "**<script>**",
        "`<script>`",
        "```\n<script>x</script>\n```",
        "- <script>",
        "*<SCRIPT>* <script src='x'>",
    ];
    for input in inputs {
        let html = render(input);
        assert!(!html.to_lowercase().contains("<script"), "{} -> {}", input, html);
        assert!(html.contains("&lt;"), "{} -> {}", input, html);
    }
}

#[test]
fn plain_text_is_escaped_exactly_once() {
    let input = "Tom & Jerry say \"hi\" -> it's <fine>";
    let html = render(input);
    assert_eq!(html, escape_html(input));
    assert_eq!(html, "Tom &amp; Jerry say &quot;hi&quot; -&gt; it&#039;s &lt;fine&gt;");
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn bold_span() {
    assert_eq!(render("**bold**"), "<strong>bold</strong>");
}

#[test]
fn italic_span() {
    assert_eq!(render("*soft*"), "<em>soft</em>");
}

#[test]
fn inline_code_span() {
    assert_eq!(render("`code`"), "<code>code</code>");
}

#[test]
fn adjacent_items_form_one_list() {
    let html = render("- a\n- b");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn html_input_stays_literal() {
    let html = render("<b>x</b>");
    assert_eq!(html, "&lt;b&gt;x&lt;/b&gt;");
    assert!(!html.contains("<b>"));
}

#[test]
fn empty_input() {
    assert_eq!(render(""), "");
}

#[test]
fn unbalanced_backticks_stay_literal() {
    assert_eq!(render("a ` b"), "a ` b");
    assert_eq!(render("`one` and `two"), "<code>one</code> and `two");
}

#[test]
fn unbalanced_asterisk_stays_literal() {
    assert_eq!(render("2 * 3 = 6"), "2 * 3 = 6");
}

#[test]
fn code_block_keeps_lines_as_breaks() {
    assert_eq!(
        render("```\nfn main() {}\n```"),
        "<pre><code><br>fn main() {}<br></code></pre>"
    );
}

#[test]
fn code_block_content_is_escaped() {
    assert_eq!(render("```<div>```"), "<pre><code>&lt;div&gt;</code></pre>");
}

#[test]
fn quotes_inside_markup_are_escaped() {
    assert_eq!(render("**\"x\"**"), "<strong>&quot;x&quot;</strong>");
}

#[test]
fn escape_stage_alone_produces_no_tags() {
    let escaped = render_through("**a** `b` <i>", "escape").unwrap();
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
}

#[test]
fn paragraphs_become_breaks() {
    assert_eq!(render("line one\nline two\n\nnext"), "line one<br>line two<br><br>next");
}
