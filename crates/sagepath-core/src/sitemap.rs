//! Sitemap XML for the public site.

use std::fmt::{self, Write};

use chrono::NaiveDate;

use crate::domain::Post;

/// A public page listed in the sitemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPage {
    pub path: &'static str,
    pub priority: &'static str,
    pub changefreq: &'static str,
}

pub const STATIC_PAGES: [StaticPage; 6] = [
    StaticPage { path: "/", priority: "1.0", changefreq: "weekly" },
    StaticPage { path: "/about", priority: "0.9", changefreq: "monthly" },
    StaticPage { path: "/services", priority: "0.9", changefreq: "monthly" },
    StaticPage { path: "/faq", priority: "0.8", changefreq: "monthly" },
    StaticPage { path: "/blog", priority: "0.8", changefreq: "weekly" },
    StaticPage { path: "/contact", priority: "0.7", changefreq: "monthly" },
];

const POST_PRIORITY: &str = "0.6";
const POST_CHANGEFREQ: &str = "monthly";

/// XML-escaped text.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn write_url<W: Write>(
    out: &mut W,
    loc: &str,
    lastmod: NaiveDate,
    changefreq: &str,
    priority: &str,
) -> fmt::Result {
    writeln!(out, "  <url>")?;
    writeln!(out, "    <loc>{}</loc>", Escaped(loc))?;
    writeln!(out, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"))?;
    writeln!(out, "    <changefreq>{changefreq}</changefreq>")?;
    writeln!(out, "    <priority>{priority}</priority>")?;
    writeln!(out, "  </url>")
}

/// Write the sitemap: static pages dated `today`, then one entry per post
/// dated by its creation day, in the order given.
pub fn write_sitemap<W: Write>(
    out: &mut W,
    site_url: &str,
    today: NaiveDate,
    posts: &[Post],
) -> fmt::Result {
    let base = site_url.trim_end_matches('/');
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#)?;

    for page in &STATIC_PAGES {
        write_url(
            out,
            &format!("{base}{}", page.path),
            today,
            page.changefreq,
            page.priority,
        )?;
    }

    for post in posts {
        write_url(
            out,
            &format!("{base}/blog/{}", post.slug),
            post.created_at.date_naive(),
            POST_CHANGEFREQ,
            POST_PRIORITY,
        )?;
    }

    write!(out, "</urlset>")
}

pub fn render(site_url: &str, today: NaiveDate, posts: &[Post]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_sitemap(&mut out, site_url, today, posts)?;
    Ok(out)
}
