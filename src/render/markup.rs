use once_cell::sync::Lazy;
use regex::Regex;

// Every pass below runs on already-escaped text, so `<` and `>` can only
// come from tags inserted by an earlier pass.

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

// Line terminators and whitespace as browser regex engines define them.
// `\r` ends a line on its own, and U+0085 is not whitespace.
const LINE_END: &str = r"\n\r\x{2028}\x{2029}";
const SPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// `^` only follows `\n` here, so a line start after the other terminators is
// matched by consuming the terminator and putting it back in the replacement.
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        &format!(r"(?m)(^|[\r\x{{2028}}\x{{2029}}])[{s}]*-[{s}]+([^{e}]*)", s = SPACE, e = LINE_END)
    ).unwrap()
});
static LIST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"<li>([^{}]*)</li>", LINE_END)).unwrap()
});
static LIST_SEAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"</ul>[{}]*<ul>", SPACE)).unwrap()
});

pub fn code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "<pre><code>${1}</code></pre>").into_owned()
}

pub fn inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "<code>${1}</code>").into_owned()
}

pub fn bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Must run after [`bold`], otherwise `**x**` would be read as `*<em>x</em>*`.
pub fn italic(text: &str) -> String {
    ITALIC.replace_all(text, "<em>${1}</em>").into_owned()
}

/// Turns `- item` lines into list items and merges neighbouring items into
/// a single `<ul>`. Leading whitespace of an item line may span blank
/// lines, so items separated only by blank lines end up in the same list.
pub fn lists(text: &str) -> String {
    let items = LIST_ITEM.replace_all(text, "${1}<li>${2}</li>");
    let wrapped = LIST_LINE.replace_all(&items, "<ul><li>${1}</li></ul>");
    LIST_SEAM.replace_all(&wrapped, "").into_owned()
}

pub fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
