//! Page documents: the localised content of one page plus its head metadata,
//! and a minimal HTML rendering of it.

use std::fmt;

use serde::Serialize;

use crate::context::AppContext;
use crate::downloads::DownloadsList;
use crate::i18n::Locale;
use crate::routing::Page;
use crate::seo::SeoMeta;

/// Product sections of the landing page: (anchor id, translation prefix, pills).
const PRODUCT_SECTIONS: [(&str, &str, [&str; 3]); 6] = [
    ("biodisc", "products.biodisc", ["Quiet", "Odour-free", "RBC"]),
    ("bioficient", "products.bioficient", ["Fluidised bed", "Low energy", "Automated"]),
    ("bioair", "products.bioair", ["Activated sludge", "97.5% BOD5", "IPS (opt.)"]),
    ("biotec", "products.biotec", ["Off-grid", "No electricity", "Gravity/Pressure"]),
    ("rainstore", "products.rainstore", ["Save up to 50%", "Low-profile", "Kits"]),
    ("psd1", "products.psd1", ["Telescopic", "A15 hatch", "Pedrollo"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    pub body: Option<String>,
    pub items: Vec<String>,
    pub links: Vec<Link>,
}

impl Section {
    fn new(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            body: None,
            items: Vec::new(),
            links: Vec::new(),
        }
    }

    fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn items(mut self, items: impl IntoIterator<Item = String>) -> Self {
        self.items.extend(items);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDocument {
    pub page: Page,
    pub locale: Locale,
    pub title: String,
    pub seo: SeoMeta,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
}

impl PageDocument {
    pub fn build(
        page: Page,
        ctx: &AppContext,
        base_url: &str,
        path: &str,
        downloads: &DownloadsList,
    ) -> Self {
        let site_name = ctx.t("meta.siteName");
        let title = match page {
            Page::Home => site_name.to_string(),
            other => format!("{} | {}", ctx.t(other.title_key()), site_name),
        };

        let canonical_path = match page {
            Page::NotFound => path,
            other => other.path(),
        };

        let nav = Page::NAVIGABLE
            .iter()
            .filter_map(|p| {
                p.nav_key().map(|key| NavLink {
                    href: p.path(),
                    label: ctx.t(key).to_string(),
                    active: *p == page,
                })
            })
            .collect();

        Self {
            page,
            locale: ctx.locale(),
            title,
            seo: SeoMeta::for_path(base_url, canonical_path),
            nav,
            sections: sections(page, ctx, downloads),
        }
    }

    pub fn render_html(&self) -> String {
        self.to_string()
    }
}

/// Minimal HTML shell: head metadata, nav and one `<section>` per section.
impl fmt::Display for PageDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!doctype html>")?;
        writeln!(f, "<html lang=\"{}\">", self.locale.tag())?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
        writeln!(f, "<title>{}</title>", escape(&self.title))?;
        writeln!(f, "<link rel=\"canonical\" href=\"{}\">", escape(&self.seo.canonical_url))?;
        for alt in &self.seo.alternates {
            writeln!(
                f,
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                escape(&alt.hreflang),
                escape(&alt.href)
            )?;
        }
        writeln!(f, "<meta property=\"og:url\" content=\"{}\">", escape(&self.seo.canonical_url))?;
        writeln!(f, "</head>\n<body>\n<nav>")?;
        for link in &self.nav {
            let current = if link.active { " aria-current=\"page\"" } else { "" };
            writeln!(f, "<a href=\"{}\"{}>{}</a>", link.href, current, escape(&link.label))?;
        }
        writeln!(f, "</nav>\n<main>")?;
        for section in &self.sections {
            write_section(f, section)?;
        }
        writeln!(f, "</main>\n</body>\n</html>")
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    writeln!(
        f,
        "<section id=\"{}\">\n<h2>{}</h2>",
        escape(&section.id),
        escape(&section.heading)
    )?;
    if let Some(body) = &section.body {
        writeln!(f, "<p>{}</p>", escape(body))?;
    }
    if !section.items.is_empty() {
        writeln!(f, "<ul>")?;
        for item in &section.items {
            writeln!(f, "<li>{}</li>", escape(item))?;
        }
        writeln!(f, "</ul>")?;
    }
    for link in &section.links {
        writeln!(f, "<a href=\"{}\">{}</a>", escape(&link.href), escape(&link.label))?;
    }
    writeln!(f, "</section>")
}

fn sections(page: Page, ctx: &AppContext, downloads: &DownloadsList) -> Vec<Section> {
    match page {
        Page::Home => {
            let mut out = vec![
                Section::new("hero", ctx.t("hero.title")).body(ctx.t("hero.sub")),
                Section::new("kpi", ctx.t("kpi.title")).items(
                    ["kpi.bod", "kpi.energy", "kpi.warranty"]
                        .iter()
                        .map(|k| ctx.t(k).to_string()),
                ),
            ];
            for (id, prefix, pills) in PRODUCT_SECTIONS {
                let title_key = format!("{prefix}_title");
                let desc_key = format!("{prefix}_desc");
                out.push(
                    Section::new(id, ctx.t(&title_key))
                        .body(ctx.t(&desc_key))
                        .items(pills.iter().map(|p| p.to_string())),
                );
            }

            let mut grid = Section::new("downloads", ctx.t("downloads.title")).body(ctx.t("downloads.note"));
            grid.links = downloads
                .items()
                .iter()
                .map(|d| Link {
                    href: d.href(),
                    label: format!("{} ({})", d.title, d.lang),
                })
                .collect();
            out.push(grid);

            out.push(Section::new("contact", ctx.t("form.title")).body(ctx.t("form.consent")));
            out
        }
        Page::About => vec![Section::new("about", ctx.t("about.title")).body(ctx.t("about.body"))],
        Page::Privacy => {
            vec![Section::new("privacy", ctx.t("privacy.title")).body(ctx.t("privacy.body"))]
        }
        Page::Calculator => vec![
            Section::new("calculator", ctx.t("calculator.title")).body(ctx.t("calculator.subtitle")),
            Section::new("inputs", ctx.t("calculator.inputs.title")).items(
                [
                    "calculator.inputs.people",
                    "calculator.inputs.peakPeople",
                    "calculator.inputs.propertyType",
                    "calculator.inputs.waterUsage",
                    "calculator.inputs.groundwater",
                ]
                .iter()
                .map(|k| ctx.t(k).to_string()),
            ),
        ],
        Page::NotFound => {
            vec![Section::new("not-found", ctx.t("notFound.title")).body(ctx.t("notFound.body"))]
        }
    }
}

/// Minimal HTML text/attribute escaping.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::i18n::Translations;

    const BASE: &str = "https://example.ee";

    fn ctx(locale: Locale) -> AppContext {
        AppContext::new(locale, Arc::new(Translations::builtin().unwrap()))
    }

    #[test]
    fn home_has_product_and_download_sections() {
        let downloads = DownloadsList::from_json_str(
            r#"[{"title":"BioDisc Manual","file":"biodisc.pdf","lang":"EN","sizeKB":10}]"#,
        )
        .unwrap();
        let doc = PageDocument::build(Page::Home, &ctx(Locale::En), BASE, "/", &downloads);

        let ids: Vec<_> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["hero", "kpi", "biodisc", "bioficient", "bioair", "biotec", "rainstore", "psd1", "downloads", "contact"]
        );
        let grid = doc.sections.iter().find(|s| s.id == "downloads").unwrap();
        assert_eq!(grid.links[0].href, "/downloads/biodisc.pdf");
        assert_eq!(doc.seo.canonical_url, "https://example.ee/");
    }

    #[test]
    fn title_and_nav_follow_locale() {
        let doc = PageDocument::build(
            Page::About,
            &ctx(Locale::Et),
            BASE,
            "/about/",
            &DownloadsList::default(),
        );
        assert_eq!(doc.title, "Meist | Kingspan Eesti BIO");
        assert_eq!(doc.seo.canonical_url, "https://example.ee/about");
        let active: Vec<_> = doc.nav.iter().filter(|n| n.active).map(|n| n.href).collect();
        assert_eq!(active, vec!["/about"]);
    }

    #[test]
    fn not_found_keeps_requested_path_as_canonical() {
        let doc = PageDocument::build(
            Page::NotFound,
            &ctx(Locale::En),
            BASE,
            "/missing",
            &DownloadsList::default(),
        );
        assert_eq!(doc.seo.canonical_url, "https://example.ee/missing");
        assert!(doc.nav.iter().all(|n| !n.active));
    }

    #[test]
    fn html_contains_head_metadata() {
        let doc = PageDocument::build(
            Page::Privacy,
            &ctx(Locale::En),
            BASE,
            "/privacy",
            &DownloadsList::default(),
        );
        let html = doc.render_html();
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.ee/privacy\">"));
        assert!(html.contains("hreflang=\"x-default\""));
        assert!(html.contains("<meta property=\"og:url\""));
        assert!(html.contains("aria-current=\"page\">Privacy policy</a>"));
    }

    #[test]
    fn html_is_a_complete_document() {
        let doc = PageDocument::build(
            Page::NotFound,
            &ctx(Locale::En),
            BASE,
            "/<script>",
            &DownloadsList::default(),
        );
        let html = doc.render_html();
        assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">\n<head>\n"));
        assert!(html.ends_with("</main>\n</body>\n</html>\n"));
        assert!(html.contains("<section id=\"not-found\">\n<h2>Page not found</h2>\n<p>"));
        assert!(!html.contains("<script>"));
        assert_eq!(html, doc.to_string());
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
