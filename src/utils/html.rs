// src/utils/html.rs

/// Sanitises user-supplied rich text before it is stored.
///
/// Whitelist-based: safe tags such as `<b>` or `<p>` survive, while `<script>`
/// (including its body), `<iframe>` and event-handler attributes are removed.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
