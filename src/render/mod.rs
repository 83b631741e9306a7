//! Message content rendering.
//!
//! Raw message text is turned into an HTML fragment by running it through
//! an ordered list of text-rewrite passes. Escaping is always the first
//! pass: every later pass inserts tags into text that can no longer
//! contain live markup of its own.

pub mod escape;
pub mod markup;

use log::trace;

pub use escape::escape_html;

/// A single rewrite step of the rendering pipeline.
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The passes in the order they run.
pub const PASSES: [Pass; 7] = [
    Pass { name: "escape", apply: escape::escape_html },
    Pass { name: "code_fence", apply: markup::code_fences },
    Pass { name: "inline_code", apply: markup::inline_code },
    Pass { name: "bold", apply: markup::bold },
    Pass { name: "italic", apply: markup::italic },
    Pass { name: "list", apply: markup::lists },
    Pass { name: "line_break", apply: markup::line_breaks },
];

/// Renders untrusted message text into an HTML fragment.
///
/// Never fails: text without markup comes back escaped, and unbalanced
/// delimiters are left in place as literal characters.
pub fn render(content: &str) -> String {
    run_passes(content, &PASSES)
}

/// Same as [`render`], treating a missing body as empty.
pub fn render_opt(content: Option<&str>) -> String {
    content.map(render).unwrap_or_default()
}

/// Runs the pipeline up to and including the pass called `last`.
/// Returns `None` when no pass has that name.
pub fn render_through(content: &str, last: &str) -> Option<String> {
    let end = PASSES.iter().position(|pass| pass.name == last)?;
    Some(run_passes(content, &PASSES[..=end]))
}

fn run_passes(content: &str, passes: &[Pass]) -> String {
    if content.is_empty() {
        return String::new();
    }
    passes.iter().fold(content.to_string(), |text, pass| {
        let next = (pass.apply)(&text);
        trace!("render pass '{}': {} -> {} bytes", pass.name, text.len(), next.len());
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_runs_first() {
        assert_eq!(PASSES[0].name, "escape");
    }

    #[test]
    fn pass_names_are_unique() {
        for (i, pass) in PASSES.iter().enumerate() {
            assert!(PASSES[i + 1..].iter().all(|other| other.name != pass.name));
        }
    }

    #[test]
    fn empty_and_missing_content_render_empty() {
        assert_eq!(render(""), "");
        assert_eq!(render_opt(None), "");
        assert_eq!(render_opt(Some("")), "");
    }

    #[test]
    fn render_through_stops_after_named_pass() {
        assert_eq!(render_through("**a** <b>", "escape").as_deref(), Some("**a** &lt;b&gt;"));
        assert_eq!(
            render_through("**a**\n*b*", "bold").as_deref(),
            Some("<strong>a</strong>\n*b*")
        );
        assert_eq!(render_through("x", "tables"), None);
    }

    #[test]
    fn full_pipeline_matches_last_pass() {
        let text = "`a` **b** *c*\n- d\n- e";
        assert_eq!(render_through(text, "line_break"), Some(render(text)));
    }

    #[test]
    fn tags_in_input_cannot_become_delimiters() {
        assert_eq!(render("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn mixed_message() {
        let rendered = render("Hi **there**,\nrun `ls`:\n- one\n- two\nbye");
        assert_eq!(
            rendered,
            "Hi <strong>there</strong>,<br>run <code>ls</code>:<br><ul><li>one</li><li>two</li></ul><br>bye"
        );
    }
}
