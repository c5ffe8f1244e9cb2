//! Message rendering: fenced code blocks and HTML escaping.

const FENCE: &str = "```";

/// Renders a chat message as safe HTML.
///
/// Fenced code blocks become `<pre><code>` sections; everything else is
/// escaped, so model output cannot inject markup into the page.
pub fn render_message_html(text: &str) -> String {
    if text.contains(FENCE) {
        format_code_blocks(text)
    } else {
        escape_html(text)
    }
}

/// Replaces markdown code fences with `<pre><code class="language-..">` tags.
/// Text between blocks is escaped like any other message content.
pub fn format_code_blocks(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(FENCE) {
        let fence_start = cursor + found;
        match parse_fenced_block(text, fence_start) {
            Some(block) => {
                html.push_str(&escape_html(&text[plain_start..fence_start]));
                html.push_str(&format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    block.language,
                    escape_html(block.code.trim())
                ));
                cursor = block.end;
                plain_start = block.end;
            }
            None => {
                // Not an opening fence. Step over one character and keep
                // looking, so a fence hidden behind a stray backtick still
                // matches.
                cursor = fence_start + 1;
            }
        }
    }

    html.push_str(&escape_html(&text[plain_start..]));
    html
}

struct FencedBlock<'a> {
    language: &'a str,
    code: &'a str,
    end: usize,
}

/// Tries to read a fenced code block starting at `start`. An opening fence is
/// three backticks, an optional language tag and a mandatory newline; the
/// block runs to the next three backticks. Returns `None` when the fence at
/// `start` does not open a complete block.
fn parse_fenced_block(text: &str, start: usize) -> Option<FencedBlock<'_>> {
    let bytes = text.as_bytes();
    let after_fence = start + FENCE.len();

    let mut lang_end = after_fence;
    while lang_end < bytes.len()
        && (bytes[lang_end].is_ascii_alphanumeric() || bytes[lang_end] == b'_')
    {
        lang_end += 1;
    }
    if bytes.get(lang_end) != Some(&b'\n') {
        return None;
    }

    let code_start = lang_end + 1;
    let close = code_start + text[code_start..].find(FENCE)?;

    let language = &text[after_fence..lang_end];
    Some(FencedBlock {
        language: if language.is_empty() { "text" } else { language },
        code: &text[code_start..close],
        end: close + FENCE.len(),
    })
}

/// Simple HTML escape
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_tags() {
        let output = escape_html("<script>alert(\"XSS\")</script>");
        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html_quotes() {
        let output = escape_html("\"test\" et 'test'");
        assert!(output.contains("&quot;"));
        assert!(output.contains("&#39;"));
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("Texte normal sans HTML"), "Texte normal sans HTML");
    }

    #[test]
    fn test_format_simple_block() {
        let output = format_code_blocks("```javascript\nconst x = 5;\n```");
        assert!(output.contains("<pre><code class=\"language-javascript\">"));
        assert!(output.contains("const x = 5;"));
        assert!(output.contains("</code></pre>"));
    }

    #[test]
    fn test_format_block_without_language() {
        let output = format_code_blocks("```\ndu code\n```");
        assert!(output.contains("<pre><code class=\"language-text\">"));
    }

    #[test]
    fn test_format_multiple_blocks() {
        let output = format_code_blocks("```js\ncode1\n```\nTexte\n```python\ncode2\n```");
        assert!(output.contains("language-js"));
        assert!(output.contains("language-python"));
        assert!(output.contains("Texte"));
    }

    #[test]
    fn test_code_inside_block_is_escaped() {
        let output = format_code_blocks("```html\n<script>alert(\"test\")</script>\n```");
        assert!(output.contains("&lt;script&gt;"));
        assert!(!output.contains("<script>alert"));
    }

    #[test]
    fn test_text_outside_blocks_is_escaped() {
        let output = format_code_blocks("<b>gras</b>\n```\ncode\n```");
        assert!(output.contains("&lt;b&gt;gras&lt;/b&gt;"));
        assert!(!output.contains("<b>"));
    }

    #[test]
    fn test_unclosed_fence_stays_plain() {
        let output = format_code_blocks("début ```js\npas de fin");
        assert!(!output.contains("<pre>"));
        assert!(output.contains("début"));
    }

    #[test]
    fn test_code_is_trimmed() {
        let output = format_code_blocks("```\n  let y = 1;  \n```");
        assert!(output.contains(">let y = 1;</code>"));
    }

    #[test]
    fn test_fence_needs_a_newline_to_open() {
        let output = format_code_blocks("pas un bloc ``` inline ``` voilà");
        assert!(!output.contains("<pre>"));
    }

    #[test]
    fn test_render_plain_message() {
        assert_eq!(render_message_html("Bonjour !"), "Bonjour !");
    }

    #[test]
    fn test_render_message_with_block() {
        let output = render_message_html("Voici :\n```rust\nfn main() {}\n```");
        assert!(output.contains("language-rust"));
        assert!(output.contains("Voici :"));
    }
}
