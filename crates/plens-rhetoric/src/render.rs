use crate::tag::RhetoricTag;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn open_span(tag: RhetoricTag) -> String {
    format!(
        r#"<span class="rh rh--{name}" data-rh-layer="{layer}" data-rh-tag="{name}" title="{emoji} {label}">"#,
        name = tag.name(),
        layer = tag.layer().as_str(),
        emoji = tag.emoji(),
        label = tag.label(),
    )
}

/// Render annotated text as HTML with styled spans for the known tags.
///
/// All input is escaped first; only the escaped markers of the four known tags
/// are turned back into markup, so anything else stays inert text.
pub fn render_annotated_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut html = escape_html(text);
    for tag in RhetoricTag::ALL {
        let open = format!("&lt;{}&gt;", tag.name());
        let close = format!("&lt;/{}&gt;", tag.name());
        html = html.replace(&open, &open_span(tag)).replace(&close, "</span>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(render_annotated_text(""), "");
    }

    #[test]
    fn known_tag_becomes_span() {
        let html = render_annotated_text("Diu <fr-dada>42%</fr-dada>.");
        assert_eq!(
            html,
            "Diu <span class=\"rh rh--fr-dada\" data-rh-layer=\"rhetoric\" \
             data-rh-tag=\"fr-dada\" title=\"🔵 Dada\">42%</span>."
        );
    }

    #[test]
    fn unknown_tags_stay_escaped() {
        let html = render_annotated_text("<script>x</script>");
        assert!(!html.contains("<script>"));
        assert_eq!(html, "&lt;script&gt;x&lt;/script&gt;");
    }

    #[test]
    fn ampersands_escaped_once() {
        assert_eq!(render_annotated_text("a & b &lt;"), "a &amp; b &amp;lt;");
    }

    #[test]
    fn markup_inside_known_tag_is_escaped() {
        let html = render_annotated_text("<fr-atac><b>fort</b></fr-atac>");
        assert!(html.starts_with("<span class=\"rh rh--fr-atac\""));
        assert!(html.contains("&lt;b&gt;fort&lt;/b&gt;"));
        assert!(html.ends_with("</span>"));
    }

    #[test]
    fn no_angle_brackets_outside_spans() {
        let html = render_annotated_text("<fr-proposta>a</fr-proposta><img src=x onerror=y>");
        let stripped = html
            .replace(&open_span(RhetoricTag::Proposal), "")
            .replace("</span>", "");
        assert!(!stripped.contains('<'));
        assert!(!stripped.contains('>'));
    }
}
