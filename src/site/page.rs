//! Server-side rendering of the portfolio page and the glitch page.
//!
//! Every string taken from the catalog goes through [`escape_html`]; markup
//! is only ever written by this module.

use crate::chat::{FailureKind, Fallbacks, formatter::escape_html as esc};
use crate::content::{Catalog, Contact, SkillCategory};

const STYLE: &str = include_str!("assets/site.css");
const WIDGET_JS: &str = include_str!("assets/widget.js");

const INQUIRY_SUBJECT: &str = "Project Inquiry";

/// `mailto:` link for the contact section's "send request" button.
pub fn inquiry_mailto(contact: &Contact, first_name: &str) -> String {
    let body = format!("Hi {first_name}, I saw your portfolio and would like to discuss a project.");
    format!(
        "mailto:{}?subject={}&body={}",
        contact.primary_email,
        urlencoding::encode(INQUIRY_SUBJECT),
        urlencoding::encode(&body),
    )
}

/// The full single-page site.
pub fn render_page(catalog: &Catalog, fallbacks: &Fallbacks, year: i32) -> String {
    let profile = catalog.profile;
    let mut out = String::with_capacity(32 * 1024);

    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\" />\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    out.push_str(&format!("  <title>{} | Portfolio</title>\n", esc(profile.name)));
    out.push_str(&format!(
        "  <meta name=\"description\" content=\"{}\" />\n",
        esc(profile.tagline)
    ));
    out.push_str("  <style>\n");
    out.push_str(STYLE);
    out.push_str("  </style>\n</head>\n<body>\n");

    nav(&mut out, catalog);
    out.push_str("<main>\n");
    hero(&mut out, catalog);
    about(&mut out, catalog);
    academics(&mut out, catalog);
    engagements(&mut out, catalog);
    skills(&mut out, catalog);
    projects(&mut out, catalog);
    services(&mut out, catalog);
    contact(&mut out, catalog);
    out.push_str("</main>\n");
    footer(&mut out, catalog, year);
    chat_widget(&mut out, fallbacks);

    out.push_str("<script>\n");
    out.push_str(WIDGET_JS);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn nav(out: &mut String, catalog: &Catalog) {
    out.push_str("<nav class=\"nav\">\n");
    out.push_str(&format!(
        "  <a class=\"brand\" href=\"#home\">{}</a>\n  <div class=\"nav-links\">\n",
        esc(catalog.profile.short_name)
    ));
    for (id, label) in [
        ("about", "About"),
        ("engagements", "Engagements"),
        ("skills", "Skills"),
        ("projects", "Work"),
        ("services", "Services"),
        ("contact", "Contact"),
    ] {
        out.push_str(&format!("    <a href=\"#{id}\">{label}</a>\n"));
    }
    out.push_str("  </div>\n</nav>\n");
}

fn hero(out: &mut String, catalog: &Catalog) {
    let p = catalog.profile;
    out.push_str("<section id=\"home\" class=\"hero\">\n");
    out.push_str(&format!(
        "  <img class=\"headshot\" src=\"{}\" alt=\"{}\" />\n",
        esc(p.headshot),
        esc(p.name)
    ));
    out.push_str(&format!("  <h1>{}</h1>\n", esc(p.name)));
    out.push_str(&format!("  <p class=\"headline\">I am {}.</p>\n", esc(p.headline)));
    out.push_str(&format!("  <blockquote>{}</blockquote>\n", esc(p.tagline)));
    out.push_str(&format!("  <p class=\"location\">{}</p>\n", esc(p.location)));
    out.push_str(&format!(
        "  <a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Resume</a>\n",
        esc(p.resume_url)
    ));
    out.push_str("</section>\n");
}

fn about(out: &mut String, catalog: &Catalog) {
    let p = catalog.profile;
    out.push_str("<section id=\"about\">\n  <h2>About</h2>\n");
    out.push_str(&format!("  <p>{}</p>\n", esc(p.bio)));
    out.push_str(&format!("  <p class=\"philosophy\">{}</p>\n", esc(p.philosophy)));
    out.push_str("  <ul class=\"principles\">\n");
    for h in p.principles {
        out.push_str(&format!(
            "    <li><strong>{}</strong> {}</li>\n",
            esc(h.title),
            esc(h.detail)
        ));
    }
    out.push_str("  </ul>\n</section>\n");
}

fn academics(out: &mut String, catalog: &Catalog) {
    out.push_str("<section id=\"academics\">\n  <h2>Academics</h2>\n");
    for a in catalog.profile.academics {
        out.push_str(&format!(
            "  <article class=\"card\">\n    <h3>{}</h3>\n    <p class=\"meta\">{} · {}</p>\n    <p>{}</p>\n  </article>\n",
            esc(a.degree),
            esc(a.institution),
            esc(a.period),
            esc(a.note)
        ));
    }
    let st = &catalog.profile.standing;
    out.push_str(&format!(
        "  <article class=\"card standing\">\n    <p class=\"score\"><span>{}</span> {}</p>\n    <h3>{}</h3>\n    <p>{}</p>\n  </article>\n",
        esc(st.metric),
        esc(st.score),
        esc(st.title),
        esc(st.detail)
    ));
    out.push_str("</section>\n");
}

fn engagements(out: &mut String, catalog: &Catalog) {
    let p = catalog.profile;
    out.push_str("<section id=\"engagements\">\n  <h2>Engagements</h2>\n");

    out.push_str("  <div class=\"grid\">\n");
    for pos in p.positions {
        out.push_str(&format!(
            "    <article class=\"card\">\n      <h3>{}</h3>\n      <p class=\"meta\">{} · {}</p>\n",
            esc(pos.title),
            esc(pos.organization),
            esc(pos.period)
        ));
        if let Some(summary) = pos.summary {
            out.push_str(&format!("      <p>{}</p>\n", esc(summary)));
        }
        out.push_str("    </article>\n");
    }
    out.push_str("  </div>\n");

    out.push_str("  <h3>Paper presentations</h3>\n  <ul class=\"presentations\">\n");
    for pr in p.presentations {
        out.push_str(&format!(
            "    <li><strong>{}</strong> {}</li>\n",
            esc(pr.institution),
            esc(pr.role)
        ));
    }
    out.push_str("  </ul>\n");

    out.push_str("  <h3>Hackathons</h3>\n  <div class=\"grid\">\n");
    for h in p.hackathons {
        out.push_str(&format!(
            "    <article class=\"card\"><h4>{}</h4><p>{}</p></article>\n",
            esc(h.title),
            esc(h.detail)
        ));
    }
    out.push_str("  </div>\n</section>\n");
}

fn skills(out: &mut String, catalog: &Catalog) {
    out.push_str("<section id=\"skills\">\n  <h2>Skills</h2>\n");
    for category in [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Other,
    ] {
        let mut in_category = catalog.skills.iter().filter(|s| s.category == category).peekable();
        if in_category.peek().is_none() {
            continue;
        }
        out.push_str(&format!(
            "  <div class=\"skill-group\">\n    <h3>{}</h3>\n    <ul>\n",
            category.label()
        ));
        for skill in in_category {
            match skill.description {
                Some(d) => out.push_str(&format!(
                    "      <li class=\"skill\" title=\"{}\">{}</li>\n",
                    esc(d),
                    esc(skill.name)
                )),
                None => out.push_str(&format!("      <li class=\"skill\">{}</li>\n", esc(skill.name))),
            }
        }
        out.push_str("    </ul>\n  </div>\n");
    }
    out.push_str("</section>\n");
}

fn projects(out: &mut String, catalog: &Catalog) {
    out.push_str("<section id=\"projects\">\n  <h2>Selected Work</h2>\n  <div class=\"grid\">\n");
    for p in catalog.projects {
        out.push_str(&format!(
            "    <article class=\"card project\" id=\"project-{}\">\n",
            esc(p.id)
        ));
        out.push_str(&format!(
            "      <img src=\"{}\" alt=\"{}\" loading=\"lazy\" />\n",
            esc(p.image),
            esc(p.title)
        ));
        out.push_str(&format!("      <h3>{}</h3>\n", esc(p.title)));
        out.push_str(&format!(
            "      <p><strong>Problem</strong> {}</p>\n      <p><strong>Impact</strong> {}</p>\n",
            esc(p.problem),
            esc(p.impact)
        ));
        out.push_str("      <ul class=\"tags\">");
        for t in p.tech {
            out.push_str(&format!("<li>{}</li>", esc(t)));
        }
        out.push_str("</ul>\n");
        match p.link {
            Some(link) => out.push_str(&format!(
                "      <a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View live</a>\n",
                esc(link)
            )),
            None => out.push_str("      <span class=\"badge\">Building</span>\n"),
        }
        out.push_str("    </article>\n");
    }
    out.push_str("  </div>\n</section>\n");
}

fn services(out: &mut String, catalog: &Catalog) {
    out.push_str("<section id=\"services\">\n  <h2>Services</h2>\n  <div class=\"grid\">\n");
    for s in catalog.services {
        out.push_str(&format!(
            "    <article class=\"card\" id=\"service-{}\">\n      <h3>{}</h3>\n      <p class=\"tagline\">{}</p>\n      <p>{}</p>\n      <p class=\"meta\">Best for: {}</p>\n    </article>\n",
            esc(s.id),
            esc(s.title),
            esc(s.tagline),
            esc(s.description),
            esc(s.best_for)
        ));
    }
    out.push_str("  </div>\n</section>\n");
}

fn contact(out: &mut String, catalog: &Catalog) {
    let p = catalog.profile;
    let c = &p.contact;
    let first_name = p.name.split_whitespace().next().unwrap_or(p.name);
    out.push_str("<section id=\"contact\">\n  <h2>Let's build something</h2>\n");
    out.push_str("  <div class=\"contact-form\">\n");
    out.push_str("    <input type=\"email\" placeholder=\"your@email.com\" aria-label=\"Your email\" />\n");
    out.push_str(&format!(
        "    <a class=\"button\" href=\"{}\">Send request</a>\n",
        esc(&inquiry_mailto(c, first_name))
    ));
    out.push_str("  </div>\n  <ul class=\"contacts\">\n");
    out.push_str(&format!(
        "    <li><a href=\"mailto:{0}\">{0}</a></li>\n    <li><a href=\"mailto:{1}\">{1}</a></li>\n",
        esc(c.primary_email),
        esc(c.secondary_email)
    ));
    out.push_str(&format!(
        "    <li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">WhatsApp {}</a></li>\n",
        esc(&c.whatsapp_link()),
        esc(c.whatsapp)
    ));
    out.push_str("  </ul>\n</section>\n");
}

fn footer(out: &mut String, catalog: &Catalog, year: i32) {
    let p = catalog.profile;
    let c = &p.contact;
    out.push_str("<footer>\n  <div class=\"socials\">\n");
    for (href, label) in [
        (c.linkedin.to_string(), "LinkedIn"),
        (c.github.to_string(), "GitHub"),
        (c.instagram_link(), "Instagram"),
        (format!("mailto:{}", c.primary_email), "Email"),
    ] {
        out.push_str(&format!(
            "    <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{label}</a>\n",
            esc(&href)
        ));
    }
    out.push_str("  </div>\n");
    out.push_str(&format!(
        "  <p class=\"credits\">{} • {} • {year}</p>\n</footer>\n",
        esc(&p.name.to_uppercase()),
        esc(&p.footer_role.to_uppercase())
    ));
}

fn chat_widget(out: &mut String, fallbacks: &Fallbacks) {
    let copy = fallbacks.copy();
    out.push_str(&format!(
        "<div id=\"chat\" class=\"chat\" data-greeting=\"{}\" data-offline=\"{}\" data-unreachable=\"{}\">\n",
        esc(copy.greeting),
        esc(&fallbacks.message(FailureKind::Offline)),
        esc(&fallbacks.message(FailureKind::Network)),
    ));
    out.push_str("  <button type=\"button\" class=\"chat-toggle\" aria-controls=\"chat-panel\" aria-expanded=\"false\">Chat</button>\n");
    out.push_str("  <div id=\"chat-panel\" class=\"chat-panel\" hidden>\n");
    out.push_str(&format!(
        "    <header><span>{}</span><button type=\"button\" class=\"chat-close\" aria-label=\"Close chat\">×</button></header>\n",
        esc(copy.title)
    ));
    out.push_str("    <div id=\"chat-log\" class=\"chat-log\" aria-live=\"polite\"></div>\n");
    out.push_str(&format!(
        "    <form class=\"chat-form\" autocomplete=\"off\">\n      <input name=\"message\" placeholder=\"{}\" aria-label=\"Message\" />\n      <button type=\"submit\">Send</button>\n    </form>\n",
        esc(copy.placeholder)
    ));
    out.push_str("  </div>\n</div>\n");
}

// ── Fallback page ─────────────────────────────────────────────────────────────

/// Last-resort page: reload button and a manual contact link.
pub fn render_glitch(contact: &Contact) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>System Glitch</title>
  <style>
{STYLE}  </style>
</head>
<body class="glitch">
  <div class="card glitch-card">
    <h1>System Glitch.</h1>
    <p>Even engineered solutions face unexpected runtime constraints. This page does not exist or failed to load.</p>
    <button type="button" class="button" onclick="window.location.reload()">Reset Connection</button>
    <a class="button secondary" href="mailto:{email}">Report Issue</a>
    <a class="home-link" href="/">Back to home</a>
  </div>
</body>
</html>
"#,
        email = esc(contact.primary_email),
    )
}
