//! Styled-markup composer: prints fragments as a self-contained HTML document.
//!
//! The document carries its own `<style>` block generated from the profile's
//! typography, plus print hints so the PDF collaborator keeps entries whole.
//! Every piece of resume text and every attribute value goes through
//! [`escape_html`]; nothing from the record reaches the output unescaped.

use crate::render::page::HeadingRule;
use crate::render::profile::{LinkLabel, StyleProfile};
use crate::render::sections::{Contact, Entry, Fragment, Header, Inline, SectionBody};

/// Escapes `& < > " '` for use in both text content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn compose_html(header: &Header, fragments: &[Fragment], profile: &StyleProfile) -> String {
    let name = escape_html(&header.name);
    let mut body = String::new();

    body.push_str("  <header class=\"header\">\n");
    body.push_str(&format!("    <div class=\"name\">{name}</div>\n"));
    if let Some(label) = &header.label {
        body.push_str(&format!(
            "    <div class=\"label\">{}</div>\n",
            escape_html(label)
        ));
    }
    if !header.contacts.is_empty() {
        let spans: Vec<String> = header
            .contacts
            .iter()
            .map(|c| format!("<span>{}</span>", contact_html(c, profile)))
            .collect();
        body.push_str(&format!(
            "    <div class=\"contact-info\">{}</div>\n",
            spans.join(separator_html(profile).as_str())
        ));
    }
    body.push_str("  </header>\n");

    for fragment in fragments {
        body.push_str(&format!(
            "  <section class=\"section section-{}\">\n",
            fragment.kind.as_str()
        ));
        body.push_str(&format!(
            "    <h2 class=\"section-title\">{}</h2>\n",
            escape_html(&fragment.title)
        ));
        match &fragment.body {
            SectionBody::Paragraphs(paragraphs) => {
                for p in paragraphs {
                    body.push_str(&format!("    <p>{}</p>\n", escape_html(p)));
                }
            }
            SectionBody::Entries(entries) => {
                for entry in entries {
                    push_entry(&mut body, entry);
                }
            }
            SectionBody::Items(items) => {
                for item in items {
                    body.push_str(&format!(
                        "    <div class=\"item\">{}</div>\n",
                        inlines_html(item)
                    ));
                }
            }
            SectionBody::InlineItems(items) => {
                let spans: Vec<String> = items
                    .iter()
                    .map(|i| format!("<span class=\"inline-item\">{}</span>", inlines_html(i)))
                    .collect();
                body.push_str(&format!(
                    "    <div class=\"inline-list\">{}</div>\n",
                    spans.join(separator_html(profile).as_str())
                ));
            }
        }
        body.push_str("  </section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{name} - Resume</title>\n  <style>\n{css}  </style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        css = stylesheet(profile),
    )
}

fn push_entry(out: &mut String, entry: &Entry) {
    out.push_str("    <div class=\"entry\">\n");
    out.push_str("      <div class=\"entry-header\">\n");
    out.push_str(&format!(
        "        <div class=\"entry-title\">{}</div>\n",
        inlines_html(&entry.heading)
    ));
    if let Some(dates) = &entry.dates {
        out.push_str(&format!(
            "        <div class=\"entry-date\">{}</div>\n",
            escape_html(dates)
        ));
    }
    out.push_str("      </div>\n");

    if !entry.byline.is_empty() {
        out.push_str(&format!(
            "      <div class=\"entry-company\">{}</div>\n",
            inlines_html(&entry.byline)
        ));
    }

    if !entry.bullets.is_empty() {
        out.push_str("      <ul class=\"highlights\">\n");
        for b in &entry.bullets {
            out.push_str(&format!("        <li>{}</li>\n", escape_html(b)));
        }
        out.push_str("      </ul>\n");
    }
    out.push_str("    </div>\n");
}

fn inlines_html(inlines: &[Inline]) -> String {
    inlines.iter().map(inline_html).collect()
}

fn inline_html(inline: &Inline) -> String {
    match inline {
        Inline::Text(t) => escape_html(t),
        Inline::Strong(children) => format!("<strong>{}</strong>", inlines_html(children)),
        Inline::Link { label, href } => link(href, label),
    }
}

fn link(href: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(href),
        escape_html(label)
    )
}

fn contact_html(contact: &Contact, profile: &StyleProfile) -> String {
    match contact {
        Contact::Text(t) => escape_html(t),
        Contact::Email(e) if !profile.show_links => escape_html(e),
        Contact::Email(e) => link(&format!("mailto:{e}"), e),
        Contact::Profile { url, .. } if !profile.show_links => escape_html(url),
        Contact::Profile { network, url } => {
            let text = match profile.contact_link_label {
                LinkLabel::Network if !network.trim().is_empty() => network,
                _ => url,
            };
            link(url, text)
        }
    }
}

fn separator_html(profile: &StyleProfile) -> String {
    format!("<span class=\"sep\">{}</span>", escape_html(&profile.separator))
}

// ────────────────────────────────────────────────────────────────────────────
// Stylesheet
// ────────────────────────────────────────────────────────────────────────────

fn stylesheet(profile: &StyleProfile) -> String {
    let t = &profile.typography;
    let heading_rule = match t.heading_rule {
        HeadingRule::Underline => "text-decoration: underline;".to_string(),
        HeadingRule::BottomBorder => format!(
            "border-bottom: 0.5pt solid {}; padding-bottom: 1pt;",
            t.accent_color
        ),
        HeadingRule::None => String::new(),
    };

    format!(
        r#"    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    html {{ font-family: {font}; font-size: {base}pt; line-height: {lh}; color: #000; }}
    body {{ max-width: {width}in; margin: 0 auto; background: #fff; }}
    a {{ color: inherit; text-decoration: none; }}
    .header {{ text-align: {align}; margin-bottom: 6pt; }}
    .name {{ font-size: {name}pt; font-weight: bold; color: {accent}; margin-bottom: 1pt; }}
    .label {{ font-size: {small}pt; font-style: italic; }}
    .contact-info {{ font-size: {small}pt; }}
    .section {{ margin-top: {section}pt; margin-bottom: {section}pt; }}
    .section p {{ font-size: {small}pt; margin-bottom: 3pt; text-align: justify; }}
    .section p:last-child {{ margin-bottom: 0; }}
    .section-title {{ font-size: {heading}pt; font-weight: bold; color: {accent}; margin-bottom: 3pt; {heading_rule} }}
    .entry {{ margin-bottom: {entry}pt; }}
    .entry:last-child {{ margin-bottom: 0; }}
    .entry-header {{ display: flex; justify-content: space-between; align-items: baseline; }}
    .entry-title {{ font-weight: bold; }}
    .entry-date {{ font-size: {small}pt; white-space: nowrap; }}
    .entry-company {{ font-size: {small}pt; margin-bottom: 1pt; }}
    .highlights {{ list-style: disc; padding-left: 12pt; margin-top: 1pt; }}
    .highlights li {{ font-size: {small}pt; }}
    .item, .inline-list {{ font-size: {small}pt; }}
    @media print {{
      .entry {{ page-break-inside: avoid; }}
      .section-title {{ page-break-after: avoid; }}
    }}
"#,
        font = t.font.css_stack(),
        base = t.base_size_pt,
        lh = t.line_height,
        width = profile.page.width_in(),
        align = t.header_align.css(),
        name = t.name_size_pt,
        accent = t.accent_color,
        small = t.small_size_pt,
        section = t.section_spacing_pt,
        heading = t.heading_size_pt,
        entry = t.entry_spacing_pt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::profile::SectionKind;
    use crate::render::sections::EntryLayout;

    fn profile(name: &str) -> StyleProfile {
        StyleProfile::builtin(name).unwrap()
    }

    fn bare_header(name: &str) -> Header {
        Header {
            name: name.into(),
            label: None,
            contacts: vec![],
        }
    }

    // ── escape_html ─────────────────────────────────────────────────────────

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> it's"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("Plain · text é"), "Plain · text é");
    }

    // ── compose_html ────────────────────────────────────────────────────────

    #[test]
    fn test_document_skeleton() {
        let html = compose_html(&bare_header("Ada"), &[], &profile("classic"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada - Resume</title>"));
        assert!(html.contains("<div class=\"name\">Ada</div>"));
        assert!(html.contains("page-break-inside: avoid"));
        assert!(html.contains("'Times New Roman'"));
        assert!(html.contains("text-align: center"));
        assert!(!html.contains("<section"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_profile_typography_reaches_stylesheet() {
        let html = compose_html(&bare_header("Ada"), &[], &profile("modern"));
        assert!(html.contains("font-family: Inter"));
        assert!(html.contains("text-align: left"));
        assert!(html.contains("border-bottom: 0.5pt solid #1f4e79"));
    }

    #[test]
    fn test_entry_text_is_escaped() {
        let fragment = Fragment {
            kind: SectionKind::Experience,
            title: "R&D <Work>".into(),
            body: SectionBody::Entries(vec![Entry {
                layout: EntryLayout::Block,
                heading: vec![Inline::Text("Engineer <II>".into())],
                byline: vec![Inline::Strong(vec![Inline::Link {
                    label: "AT&T".into(),
                    href: "https://example.com/?a=1&b=\"2\"".into(),
                }])],
                dates: Some("2020 - Present".into()),
                bullets: vec!["Cut p99 < 5ms & kept <script>alert(1)</script> out".into()],
            }]),
        };
        let html = compose_html(&bare_header("A <B> & C"), &[fragment], &profile("classic"));

        assert!(html.contains("<title>A &lt;B&gt; &amp; C - Resume</title>"));
        assert!(html.contains("<h2 class=\"section-title\">R&amp;D &lt;Work&gt;</h2>"));
        assert!(html.contains("Engineer &lt;II&gt;"));
        assert!(html.contains(
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">AT&amp;T</a>"
        ));
        assert!(html.contains(
            "<li>Cut p99 &lt; 5ms &amp; kept &lt;script&gt;alert(1)&lt;/script&gt; out</li>"
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_contact_link_label_follows_profile() {
        let header = Header {
            name: "Ada".into(),
            label: Some("Analyst".into()),
            contacts: vec![
                Contact::Email("ada@example.com".into()),
                Contact::Profile {
                    network: "GitHub".into(),
                    url: "https://github.com/ada".into(),
                },
            ],
        };
        let classic = compose_html(&header, &[], &profile("classic"));
        assert!(classic.contains("<a href=\"https://github.com/ada\">https://github.com/ada</a>"));
        assert!(classic.contains("<a href=\"mailto:ada@example.com\">ada@example.com</a>"));
        assert!(classic.contains("<div class=\"label\">Analyst</div>"));

        let modern = compose_html(&header, &[], &profile("modern"));
        assert!(modern.contains("<a href=\"https://github.com/ada\">GitHub</a>"));
        assert!(modern.contains("<span class=\"sep\"> | </span>"));

        let plain = compose_html(&header, &[], &profile("plain"));
        assert!(plain.contains("<span>ada@example.com</span>"));
        assert!(plain.contains("<span>https://github.com/ada</span>"));
        assert!(!plain.contains("<a href"));
    }

    #[test]
    fn test_inline_items_and_paragraphs() {
        let fragments = vec![
            Fragment {
                kind: SectionKind::Summary,
                title: "Summary".into(),
                body: SectionBody::Paragraphs(vec!["One".into(), "Two".into()]),
            },
            Fragment {
                kind: SectionKind::Languages,
                title: "Languages".into(),
                body: SectionBody::InlineItems(vec![
                    vec![Inline::Text("English".into())],
                    vec![Inline::Text("French".into())],
                ]),
            },
        ];
        let html = compose_html(&bare_header("Ada"), &fragments, &profile("classic"));
        assert!(html.contains("<p>One</p>\n    <p>Two</p>"));
        assert!(html.contains(
            "<span class=\"inline-item\">English</span><span class=\"sep\"> · </span><span class=\"inline-item\">French</span>"
        ));
        assert!(html.find("section-summary").unwrap() < html.find("section-languages").unwrap());
    }
}
