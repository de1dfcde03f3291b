//! SSML-lite markup validation and span splitting
//!
//! The dialect knows four element kinds (`p`, `s`, `prosody`, `break`)
//! plus free text, optionally wrapped in a `speak` envelope. Validity is a
//! structural property checked over the parsed element tree, not mere
//! well-formedness. Splitting treats `break` and `prosody` boundaries as
//! implicit sentence boundaries and cuts the document at `p`/`s` tag
//! boundaries, preserving everything else verbatim.
//!
//! The input is parsed as a fragment: multiple top-level elements and bare
//! top-level text are allowed, and "outer level" means a direct child of
//! the fragment.

use crate::arabic;
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

/// The recognized markup element kinds.
pub const RECOGNIZED_TAGS: &[&str] = &["p", "s", "prosody", "break"];

/// The document envelope tag, stripped before span splitting.
pub const WRAPPER_TAG: &str = "speak";

/// Outcome of structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether every structural predicate holds.
    pub is_valid: bool,
    /// The first failing predicate's reason, suitable for direct display.
    pub reason: Option<String>,
}

impl Verdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: &str) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// One parsed element; only structure is retained, text is not.
struct Element {
    tag: String,
    children: Vec<Element>,
}

/// Parse `text` as a markup fragment, returning its top-level elements.
///
/// `None` means the text is not well-formed: mismatched or stray closing
/// tags, unclosed elements, or bad escapes.
fn parse_fragment(text: &str) -> Option<Vec<Element>> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut roots: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Err(_) => return None,
            Ok(Event::Start(start)) => {
                let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push(Element {
                    tag,
                    children: Vec::new(),
                });
            }
            Ok(Event::End(_)) => {
                let element = stack.pop()?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => roots.push(element),
                }
            }
            Ok(Event::Empty(empty)) => {
                let element = Element {
                    tag: String::from_utf8_lossy(empty.name().as_ref()).into_owned(),
                    children: Vec::new(),
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => roots.push(element),
                }
            }
            Ok(Event::Eof) => break,
            // Text, CDATA, comments and declarations carry no structure.
            Ok(_) => {}
        }
    }

    if stack.is_empty() {
        Some(roots)
    } else {
        None
    }
}

fn descendants(roots: &[Element]) -> Vec<&Element> {
    let mut all = Vec::new();
    let mut queue: Vec<&Element> = roots.iter().collect();
    while let Some(element) = queue.pop() {
        queue.extend(element.children.iter());
        all.push(element);
    }
    all
}

/// Check the structural predicates over `text`.
///
/// The predicates are checked in a fixed order and the first failure wins:
/// well-formedness, `break` at the outer level only, `prosody` at the
/// outer level only, `s` elements free of child elements, `p` children all
/// `s`, `prosody` children all `s` or `p`.
pub fn validate(text: &str) -> Verdict {
    let roots = match parse_fragment(text) {
        Some(roots) => roots,
        None => return Verdict::invalid("invalid XML"),
    };
    let all = descendants(&roots);

    let outer_count = |tag: &str| roots.iter().filter(|e| e.tag == tag).count();
    let total_count = |tag: &str| all.iter().filter(|e| e.tag == tag).count();

    if total_count("break") != outer_count("break") {
        return Verdict::invalid("break tag not in outer level");
    }
    if total_count("prosody") != outer_count("prosody") {
        return Verdict::invalid("prosody tag not in outer level");
    }
    if all
        .iter()
        .any(|e| e.tag == "s" && !e.children.is_empty())
    {
        return Verdict::invalid("s tags can only contain text");
    }
    if all
        .iter()
        .filter(|e| e.tag == "p")
        .any(|e| e.children.iter().any(|c| c.tag != "s"))
    {
        return Verdict::invalid("p tags can only contain text or s tags");
    }
    if all
        .iter()
        .filter(|e| e.tag == "prosody")
        .any(|e| e.children.iter().any(|c| c.tag != "s" && c.tag != "p"))
    {
        return Verdict::invalid("prosody tags can only contain text, s tags or p tags");
    }

    Verdict::valid()
}

static BREAK_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(<break[^>]*>[^>]*</break>|<break[^>]*>)").expect("break pattern compiles")
});

static PROSODY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(<prosody[^>]*>|</prosody>)").expect("prosody pattern compiles"));

static SENTENCE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(<p>|</p>|<s>|</s>)").expect("sentence tag pattern compiles"));

static SPAN_SPLITTER: Lazy<Regex> = Lazy::new(|| {
    let class: String = arabic::SENTENCE_PUNCTUATION
        .iter()
        .chain(arabic::LATIN_PUNCTUATION)
        .map(|&ch| regex::escape(&ch.to_string()))
        .collect();
    Regex::new(&format!(r"[{class}\s]+")).expect("span splitter pattern compiles")
});

/// Split a document into per-sentence spans.
///
/// `break` elements and `prosody` open/close tags become implicit sentence
/// boundaries; the document is then cut at every `p`/`s` tag boundary and
/// the `p`/`s` tags themselves are stripped from the spans. Other markup
/// and all text survive verbatim. Spans may be empty; callers filter.
pub fn split_into_spans(text: &str) -> Vec<String> {
    let text = BREAK_ELEMENT.replace_all(text, "<s>${1}</s>");
    let text = PROSODY_TAG.replace_all(&text, "<s>${1}</s>");
    let text = SENTENCE_TAG.replace_all(&text, "${1}~~");
    text.split("~~")
        .map(|span| strip_tag(&strip_tag(span, "s"), "p"))
        .collect()
}

/// Remove every bare `<tag>` and `</tag>` occurrence from `text`.
pub fn strip_tag(text: &str, tag: &str) -> String {
    let pattern = format!("<{0}>|</{0}>", regex::escape(tag));
    let re = Regex::new(&pattern).expect("tag pattern compiles");
    re.replace_all(text, "").into_owned()
}

/// Length of a span measured the way the segmentation threshold expects:
/// the number of fragments produced by splitting on runs of whitespace and
/// Arabic/Latin punctuation, boundary-adjacent empty fragments included.
pub fn sentence_length(text: &str) -> usize {
    SPAN_SPLITTER.split(text).count()
}
