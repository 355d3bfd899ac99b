//! Page composition.
//!
//! Assembles the content tables into one HTML document in fixed section
//! order: hero, playbook steps, architecture cheat sheet, launch checklist,
//! further resources, footer. Rendering is a pure function of the tables —
//! same input, byte-identical output, no timestamps, no randomness.

use crate::content::{
    ARCHITECTURE_SECTION, ARCHITECTURE_TIPS, CHECKLIST_SECTION, FOOTER, HERO, HeroAction,
    LAUNCH_CHECKLIST, PLAYBOOK_SECTION, RESOURCE_LINKS, RESOURCES_SECTION, SectionHeader, Step,
};
use crate::render::escape::{escape_attr, escape_text};
use crate::render::style::STYLESHEET;

/// Render the complete playbook page.
#[must_use]
pub fn render_page() -> String {
    let mut lines = Vec::new();

    lines.push("<!DOCTYPE html>".to_string());
    lines.push("<html lang=\"en\">".to_string());
    render_head(&mut lines);
    lines.push("<body>".to_string());

    render_hero(&mut lines);

    lines.push("<main>".to_string());
    render_playbook(&mut lines);
    render_architecture(&mut lines);
    render_checklist(&mut lines);
    render_resources(&mut lines);
    lines.push("</main>".to_string());

    render_footer(&mut lines);

    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

/// Document head: metadata plus the inlined stylesheet.
fn render_head(lines: &mut Vec<String>) {
    lines.push("<head>".to_string());
    lines.push("<meta charset=\"utf-8\">".to_string());
    lines.push(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
    );
    lines.push(format!("<title>{}</title>", escape_text(HERO.eyebrow)));
    lines.push("<style>".to_string());
    lines.push(STYLESHEET.trim_end().to_string());
    lines.push("</style>".to_string());
    lines.push("</head>".to_string());
}

/// Hero header with eyebrow, heading, lede, and the two action links.
fn render_hero(lines: &mut Vec<String>) {
    lines.push("<header class=\"hero\">".to_string());
    lines.push(format!("<p class=\"eyebrow\">{}</p>", escape_text(HERO.eyebrow)));
    lines.push(format!("<h1>{}</h1>", escape_text(HERO.heading)));
    lines.push(format!("<p class=\"lede\">{}</p>", escape_text(HERO.lede)));
    lines.push("<div class=\"actions\">".to_string());
    lines.push(action_link(&HERO.primary_action, "primary"));
    lines.push(action_link(&HERO.secondary_action, "secondary"));
    lines.push("</div>".to_string());
    lines.push("</header>".to_string());
}

/// The six playbook step cards.
fn render_playbook(lines: &mut Vec<String>) {
    lines.push("<section id=\"playbook\" class=\"playbook\">".to_string());
    render_section_header(lines, &PLAYBOOK_SECTION);
    for step in crate::content::STEPS {
        render_step(lines, step);
    }
    lines.push("</section>".to_string());
}

/// One step card: title, summary, details, optional code sample.
fn render_step(lines: &mut Vec<String>, step: &Step) {
    lines.push("<article class=\"step\">".to_string());
    lines.push(format!("<h3>{}</h3>", escape_text(step.title)));
    lines.push(format!("<p class=\"summary\">{}</p>", escape_text(step.summary)));
    lines.push("<ul>".to_string());
    for detail in step.details {
        lines.push(format!("<li>{}</li>", escape_text(detail)));
    }
    lines.push("</ul>".to_string());
    if let Some(sample) = step.code {
        lines.push("<div class=\"code-sample\">".to_string());
        lines.push(format!(
            "<header><span>{}</span><span>{}</span></header>",
            escape_text(sample.title),
            escape_text(sample.language)
        ));
        lines.push(format!("<pre><code>{}</code></pre>", escape_text(sample.text)));
        lines.push("</div>".to_string());
    }
    lines.push("</article>".to_string());
}

/// The architecture cheat sheet cards.
fn render_architecture(lines: &mut Vec<String>) {
    lines.push("<section class=\"architecture\">".to_string());
    render_section_header(lines, &ARCHITECTURE_SECTION);
    lines.push("<div class=\"tips\">".to_string());
    for tip in ARCHITECTURE_TIPS {
        lines.push("<div class=\"tip\">".to_string());
        lines.push(format!("<h3>{}</h3>", escape_text(tip.title)));
        lines.push("<ul>".to_string());
        for bullet in tip.bullets {
            lines.push(format!("<li>{}</li>", escape_text(bullet)));
        }
        lines.push("</ul>".to_string());
        lines.push("</div>".to_string());
    }
    lines.push("</div>".to_string());
    lines.push("</section>".to_string());
}

/// The launch checklist.
fn render_checklist(lines: &mut Vec<String>) {
    lines.push("<section class=\"launch-checklist\">".to_string());
    render_section_header(lines, &CHECKLIST_SECTION);
    lines.push("<ul class=\"checklist\">".to_string());
    for item in LAUNCH_CHECKLIST {
        lines.push(format!(
            "<li><span class=\"mark\">\u{2713}</span><span>{}</span></li>",
            escape_text(item)
        ));
    }
    lines.push("</ul>".to_string());
    lines.push("</section>".to_string());
}

/// The further-resources link cards.
fn render_resources(lines: &mut Vec<String>) {
    lines.push("<section id=\"resources\" class=\"further-resources\">".to_string());
    render_section_header(lines, &RESOURCES_SECTION);
    lines.push("<div class=\"resources\">".to_string());
    for link in RESOURCE_LINKS {
        lines.push(format!("<a class=\"resource\" href=\"{}\">", escape_attr(link.href)));
        lines.push(format!("<span class=\"name\">{}</span>", escape_text(link.title)));
        lines.push(format!("<p>{}</p>", escape_text(link.description)));
        lines.push("</a>".to_string());
    }
    lines.push("</div>".to_string());
    lines.push("</section>".to_string());
}

/// Footer with closing message and back-to-top link.
fn render_footer(lines: &mut Vec<String>) {
    lines.push("<footer>".to_string());
    lines.push("<div class=\"inner\">".to_string());
    lines.push(format!("<p>{}</p>", escape_text(FOOTER.message)));
    lines.push(format!(
        "<a href=\"{}\">{}</a>",
        escape_attr(FOOTER.back_href),
        escape_text(FOOTER.back_label)
    ));
    lines.push("</div>".to_string());
    lines.push("</footer>".to_string());
}

/// Section heading plus optional intro paragraph.
fn render_section_header(lines: &mut Vec<String>, header: &SectionHeader) {
    lines.push("<div>".to_string());
    lines.push(format!("<h2>{}</h2>", escape_text(header.heading)));
    if let Some(intro) = header.intro {
        lines.push(format!("<p class=\"section-intro\">{}</p>", escape_text(intro)));
    }
    lines.push("</div>".to_string());
}

/// One hero action anchor with its style class.
fn action_link(action: &HeroAction, class: &str) -> String {
    format!(
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        escape_attr(action.href),
        escape_text(action.label)
    )
}
