//! HTML sanitization by text-node escaping.

/// Escapes every markup-significant character in `input` so the result, when
/// rendered as HTML, displays as literal text identical to the input.
///
/// `&` becomes `&amp;`, `<` becomes `&lt;`, `>` becomes `&gt;`. The input is
/// never parsed or executed as markup, and input without any of these
/// characters is returned unchanged. Single pass, so an ampersand that is
/// already part of an entity is escaped too (`"&lt;"` becomes `"&amp;lt;"`).
///
/// # Examples
///
/// ```
/// use vanilla_helpers::sanitize;
///
/// assert_eq!(
///     sanitize("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// assert_eq!(sanitize("plain text"), "plain text");
/// ```
pub fn sanitize(input: &str) -> String {
    if !input.contains('&') && !input.contains('<') && !input.contains('>') {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
