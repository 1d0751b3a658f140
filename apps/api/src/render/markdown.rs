//! Flow-markup composer: prints fragments as a flat Markdown document.
//!
//! Layout: `#` name, bold label, contact line, then `##` per section. Positions and
//! credentials use a `###` title; engagements collapse to one bullet each. No
//! structural nesting beyond a single bullet level.

use crate::render::profile::StyleProfile;
use crate::render::sections::{Contact, Entry, EntryLayout, Fragment, Header, Inline, SectionBody};

pub fn compose_markdown(header: &Header, fragments: &[Fragment], profile: &StyleProfile) -> String {
    let mut md = format!("# {}\n\n", header.name);

    if let Some(label) = &header.label {
        md.push_str(&format!("**{label}**\n\n"));
    }

    let contacts: Vec<String> = header.contacts.iter().map(|c| contact_md(c, profile)).collect();
    if !contacts.is_empty() {
        md.push_str(&contacts.join(profile.separator.as_str()));
        md.push_str("\n\n");
    }

    for fragment in fragments {
        md.push_str(&format!("## {}\n\n", fragment.title));
        match &fragment.body {
            SectionBody::Paragraphs(paragraphs) => {
                for p in paragraphs {
                    md.push_str(p);
                    md.push_str("\n\n");
                }
            }
            SectionBody::Entries(entries) => {
                for entry in entries {
                    push_entry(&mut md, entry);
                }
                if !md.ends_with("\n\n") {
                    md.push('\n');
                }
            }
            SectionBody::Items(items) => {
                for item in items {
                    md.push_str(&format!("- {}\n", inlines_md(item)));
                }
                md.push('\n');
            }
            SectionBody::InlineItems(items) => {
                let joined: Vec<String> = items.iter().map(|i| inlines_md(i)).collect();
                md.push_str(&joined.join(profile.separator.as_str()));
                md.push_str("\n\n");
            }
        }
    }

    let mut out = md.trim_end().to_string();
    out.push('\n');
    out
}

fn push_entry(md: &mut String, entry: &Entry) {
    let heading = inlines_md(&entry.heading);
    let byline = inlines_md(&entry.byline);

    match entry.layout {
        EntryLayout::Block => {
            md.push_str(&format!("### {heading}\n"));
            let detail: Vec<&str> = [byline.as_str(), entry.dates.as_deref().unwrap_or("")]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            if !detail.is_empty() {
                md.push_str(&detail.join(" | "));
                md.push('\n');
            }
            md.push('\n');

            if !entry.bullets.is_empty() {
                for b in &entry.bullets {
                    md.push_str(&format!("- {b}\n"));
                }
                md.push('\n');
            }
        }
        EntryLayout::Line => {
            md.push_str(&format!("- **{heading}**"));
            if let Some(dates) = &entry.dates {
                md.push_str(&format!(" ({dates})"));
            }
            if !byline.is_empty() {
                md.push_str(&format!(": {byline}"));
            }
            md.push('\n');
        }
    }
}

fn inlines_md(inlines: &[Inline]) -> String {
    inlines.iter().map(inline_md).collect()
}

fn inline_md(inline: &Inline) -> String {
    match inline {
        Inline::Text(t) => t.clone(),
        Inline::Strong(children) => format!("**{}**", inlines_md(children)),
        Inline::Link { label, href } => format!("[{label}]({href})"),
    }
}

fn contact_md(contact: &Contact, profile: &StyleProfile) -> String {
    match contact {
        Contact::Text(t) => t.clone(),
        Contact::Email(e) if !profile.show_links => e.clone(),
        Contact::Profile { url, .. } if !profile.show_links => url.clone(),
        Contact::Email(e) => format!("[{e}](mailto:{e})"),
        Contact::Profile { network, url } => {
            let label = if network.trim().is_empty() { url } else { network };
            format!("[{label}]({url})")
        }
    }
}
