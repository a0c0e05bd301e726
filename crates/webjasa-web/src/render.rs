//! Template environment for every page.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Site details and navigation are globals so each page only supplies its
//! own content.

use chrono::{Datelike, Utc};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use webjasa_common::{Result, SiteError};

use crate::config::SiteInfo;
use crate::content::NAV_LINKS;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html",         include_str!("../templates/base.html")),
    ("home.html",         include_str!("../templates/home.html")),
    ("services.html",     include_str!("../templates/services.html")),
    ("pricing.html",      include_str!("../templates/pricing.html")),
    ("faq.html",          include_str!("../templates/faq.html")),
    ("about.html",        include_str!("../templates/about.html")),
    ("contact.html",      include_str!("../templates/contact.html")),
    ("reviews.html",      include_str!("../templates/reviews.html")),
    ("blog.html",         include_str!("../templates/blog.html")),
    ("blog_post.html",    include_str!("../templates/blog_post.html")),
    ("404.html",          include_str!("../templates/404.html")),
];

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(site: &SiteInfo) -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| SiteError::Template(format!("{name}: {e}")))?;
        }

        // Server-built links are marked safe so their slashes stay unescaped.
        env.add_global("site", context! {
            name => &site.name,
            tagline => &site.tagline,
            whatsapp_url => Value::from_safe_string(site.whatsapp_url()),
            mailto_url => Value::from_safe_string(site.mailto_url()),
            phone_display => &site.phone_display,
            email => &site.email,
            address_lines => &site.address_lines,
            founded_year => site.founded_year,
        });
        let nav_links: Vec<Value> = NAV_LINKS
            .iter()
            .map(|link| context! {
                label => link.label,
                href => Value::from_safe_string(link.href.to_string()),
            })
            .collect();
        env.add_global("nav_links", nav_links);
        env.add_global("current_year", Utc::now().year());

        tracing::debug!(templates = TEMPLATES.len(), "template environment ready");
        Ok(Self { env })
    }

    /// Renders `name` with `ctx` layered over the globals.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| SiteError::Template(format!("{name}: {e}")))?;
        template
            .render(ctx)
            .map_err(|e| SiteError::Template(format!("{name}: {e}")))
    }
}
