//! Portfolio content — the static, read-only configuration the pages render.
//!
//! Loaded once at startup and shared by reference. This is content, not
//! state: nothing here mutates after `load()`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Know,
    Learned,
    Aspiring,
}

impl ProjectKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Know => "What I Know",
            Self::Learned => "What I Learned",
            Self::Aspiring => "What I'm Aspiring To",
        }
    }

    /// CSS class suffix for the project badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Know => "know",
            Self::Learned => "learned",
            Self::Aspiring => "aspiring",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub kind: ProjectKind,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub href: Option<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub name: String,
    pub about: String,
    pub photo: Option<Photo>,
    pub hero_statement: String,
    /// Exactly three showcased projects, one per [`ProjectKind`].
    pub big_three: Vec<Project>,
    pub links: Vec<Link>,
    pub currently_learning: Vec<String>,
}

impl PortfolioConfig {
    /// The site owner's content. Edit here; there is no external content file.
    #[must_use]
    pub fn load() -> Self {
        Self {
            name: "Avery Collins".into(),
            about: "Backend engineer with a soft spot for boring, reliable \
                    infrastructure. I spend most days building HTTP services \
                    and the small operational tools that keep them honest."
                .into(),
            photo: Some(Photo {
                src: "/assets/avatar.svg".into(),
                alt: "Portrait of Avery Collins".into(),
                width: 240,
                height: 240,
            }),
            hero_statement: "I build dependable web services and care about the \
                             failure paths nobody demos."
                .into(),
            big_three: vec![
                Project {
                    kind: ProjectKind::Know,
                    title: "Freight ETA API".into(),
                    description: "Shipment tracking service aggregating carrier \
                                  feeds into a single arrival-estimate endpoint."
                        .into(),
                    tech: vec!["Rust".into(), "Axum".into(), "PostgreSQL".into()],
                    highlights: vec![
                        "Sub-50ms p99 on cached routes".into(),
                        "Graceful degradation when carrier feeds stall".into(),
                    ],
                    href: Some("https://freight-eta.example.com".into()),
                    repo: Some("https://github.com/avery-collins/freight-eta".into()),
                },
                Project {
                    kind: ProjectKind::Learned,
                    title: "Log Triage CLI".into(),
                    description: "Terminal tool that clusters production log \
                                  lines and surfaces the novel ones first."
                        .into(),
                    tech: vec!["Rust".into(), "Tokio".into()],
                    highlights: vec![
                        "First real project with async streams".into(),
                        "Taught me more about backpressure than any book".into(),
                    ],
                    href: None,
                    repo: Some("https://github.com/avery-collins/log-triage".into()),
                },
                Project {
                    kind: ProjectKind::Aspiring,
                    title: "Edge Cache Mesh".into(),
                    description: "Design sketch for a cooperative cache layer \
                                  spanning small edge nodes."
                        .into(),
                    tech: vec!["Rust".into(), "WebAssembly".into()],
                    highlights: vec!["Early prototype, consistency model still open".into()],
                    href: None,
                    repo: None,
                },
            ],
            links: vec![
                Link {
                    label: "GitHub".into(),
                    href: "https://github.com/avery-collins".into(),
                },
                Link {
                    label: "LinkedIn".into(),
                    href: "https://www.linkedin.com/in/avery-collins".into(),
                },
                Link {
                    label: "Email".into(),
                    href: "mailto:avery@averycollins.dev".into(),
                },
            ],
            currently_learning: vec![
                "Rust".into(),
                "distributed tracing".into(),
                "WebAssembly".into(),
            ],
        }
    }

    /// Join the learning topics into one English sentence.
    #[must_use]
    pub fn learning_sentence(&self) -> String {
        match self.currently_learning.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        }
    }

    /// The owner's email address, if one can be found among the links:
    /// a `mailto:` href, a link labelled "email", or a bare address.
    #[must_use]
    pub fn contact_email(&self) -> Option<String> {
        let link = self.links.iter().find(|l| {
            l.href.starts_with("mailto:")
                || l.label.eq_ignore_ascii_case("email")
                || looks_like_email(&l.href)
        })?;
        Some(
            link.href
                .strip_prefix("mailto:")
                .unwrap_or(&link.href)
                .to_string(),
        )
    }

    /// Links shown in the footer row; `mailto:` entries belong to the form.
    pub fn social_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| !l.href.starts_with("mailto:"))
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
