//! Server-side rendering of the portfolio page.
//!
//! One `include_str!` template with `{{TOKEN}}` substitution; repeated
//! fragments (project cards, badges, link rows) are built in code. All
//! interpolated content is HTML-escaped.

use crate::content::{PortfolioConfig, Project};
use crate::services::contact::SubmitStatus;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// What the contact form renders with: lifecycle status, sticky field values
/// and, when the chain fell through to `mailto:`, the navigation target.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub status: SubmitStatus,
    pub name: String,
    pub email: String,
    pub message: String,
    pub mailto: Option<String>,
}

#[must_use]
pub fn render_home(portfolio: &PortfolioConfig, form: &FormView) -> String {
    let photo = portfolio
        .photo
        .as_ref()
        .map(|p| {
            format!(
                r#"<img class="portrait" src="{}" alt="{}" width="{}" height="{}">"#,
                escape_html(&p.src),
                escape_html(&p.alt),
                p.width,
                p.height
            )
        })
        .unwrap_or_default();

    let projects: String = portfolio.big_three.iter().map(project_card).collect();

    let links: String = portfolio
        .social_links()
        .map(|l| {
            format!(
                r#"<a class="button-link" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&l.href),
                escape_html(&l.label)
            )
        })
        .collect();

    // The final fallback both shows a notice and navigates to the visitor's
    // mail client, like the original location assignment.
    let head_extra = form
        .mailto
        .as_deref()
        .map(|href| {
            format!(r#"<meta http-equiv="refresh" content="0;url={}">"#, escape_html(href))
        })
        .unwrap_or_default();

    let status_line = form
        .status
        .message()
        .map(|m| format!(r#"<p class="status" role="status">{}</p>"#, escape_html(m)))
        .unwrap_or_default();

    let submit_label = if form.status == SubmitStatus::Submitting { "Sending…" } else { "Send Message" };

    // Visitor-controlled values are substituted last so they cannot smuggle
    // template tokens into an earlier replacement.
    INDEX_TEMPLATE
        .replace("{{NAME}}", &escape_html(&portfolio.name))
        .replace("{{ABOUT}}", &escape_html(&portfolio.about))
        .replace("{{PHOTO}}", &photo)
        .replace("{{HERO}}", &escape_html(&portfolio.hero_statement))
        .replace("{{PROJECTS}}", &projects)
        .replace("{{LEARNING}}", &escape_html(&portfolio.learning_sentence()))
        .replace("{{LINKS}}", &links)
        .replace("{{SUBMIT_DISABLED}}", if form.status.submit_disabled() { " disabled" } else { "" })
        .replace("{{SUBMIT_LABEL}}", submit_label)
        .replace("{{HEAD_EXTRA}}", &head_extra)
        .replace("{{STATUS}}", &status_line)
        .replace("{{FORM_NAME}}", &escape_html(&form.name))
        .replace("{{FORM_EMAIL}}", &escape_html(&form.email))
        .replace("{{FORM_MESSAGE}}", &escape_html(&form.message))
}

fn project_card(project: &Project) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!(r#"<span class="badge neutral">{}</span>"#, escape_html(t)))
        .collect();

    let highlights: String = project
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();

    let mut actions = String::new();
    if let Some(href) = &project.href {
        actions.push_str(&format!(
            r#"<a class="button-link" href="{}" target="_blank" rel="noopener noreferrer">Live</a>"#,
            escape_html(href)
        ));
    }
    if let Some(repo) = &project.repo {
        actions.push_str(&format!(
            r#"<a class="button-link" href="{}" target="_blank" rel="noopener noreferrer">Code</a>"#,
            escape_html(repo)
        ));
    }

    format!(
        r#"<article class="card project">
  <div class="project-head">
    <h3 class="project-title">{title}</h3>
    <span class="badge {kind_class}">{kind_label}</span>
  </div>
  <p class="project-desc">{description}</p>
  <div class="badges">{tech}</div>
  <ul class="bullets">{highlights}</ul>
  <div class="links-row">{actions}</div>
</article>
"#,
        title = escape_html(&project.title),
        kind_class = project.kind.css_class(),
        kind_label = project.kind.label(),
        description = escape_html(&project.description),
        tech = tech,
        highlights = highlights,
        actions = actions,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
