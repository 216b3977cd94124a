//! Server-rendered HTML.
//!
//! All markup is built with maud, so every dynamic value is escaped.

pub mod admin;
pub mod blog;
pub mod pages;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::SiteConfig;

/// Inline CSS shared by every page.
pub const SITE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafaf9;--fg:#1f2937;--fg2:#4b5563;--fg3:#9ca3af;--sage:#4d6a57;--sage-dark:#3b5243;--sage-light:#eef3ef;--terracotta:#b4583c;--surface:#fff;--border:#e7e5e4;--danger:#b91c1c}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.65;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
h1,h2,h3{font-family:Georgia,"Times New Roman",serif;color:var(--fg);line-height:1.25}
h1{font-size:2.4rem;margin-bottom:1rem}
h2{font-size:1.8rem;margin-bottom:.75rem}
h3{font-size:1.2rem;margin-bottom:.5rem}
p{margin-bottom:1rem}
a{color:var(--sage);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
ul{margin:0 0 1rem 1.25rem}
.skip{position:absolute;left:-999px}
.skip:focus{left:1rem;top:1rem;background:var(--surface);padding:.5rem 1rem;z-index:50}
nav.top{background:rgba(255,255,255,.92);border-bottom:1px solid var(--border);position:sticky;top:0;z-index:40}
.nav-inner{max-width:72rem;margin:0 auto;padding:0 1rem;display:flex;align-items:center;justify-content:space-between;min-height:4rem;flex-wrap:wrap;gap:.5rem}
.brand{font-family:Georgia,serif;font-size:1.25rem;font-weight:600;color:var(--sage)}
.nav-links{display:flex;gap:1.5rem;align-items:center;flex-wrap:wrap}
.nav-links a{color:var(--fg2);font-size:.9rem;font-weight:500}
.nav-links a.active{color:var(--sage-dark);border-bottom:2px solid var(--sage-dark)}
.inline-form{display:inline}
.link-button{background:none;border:none;color:var(--fg2);font:inherit;font-size:.9rem;cursor:pointer}
main{flex:1;width:100%}
.section{max-width:72rem;margin:0 auto;padding:3.5rem 1rem}
.narrow{max-width:48rem}
.hero{background:var(--sage-light);text-align:center}
.hero p.lead{font-size:1.15rem;color:var(--fg2);max-width:44rem;margin:0 auto 1.5rem}
.accent{color:var(--terracotta)}
.btn{display:inline-block;padding:.7rem 1.4rem;border-radius:.5rem;font-weight:600;border:1px solid transparent;cursor:pointer;font-size:.95rem}
.btn:hover{text-decoration:none}
.btn-primary{background:var(--sage);color:#fff}
.btn-primary:hover{background:var(--sage-dark)}
.btn-secondary{background:var(--surface);color:var(--sage);border-color:var(--sage)}
.btn-danger{background:var(--danger);color:#fff}
.btn[disabled],.btn:disabled{background:#d1d5db;color:#6b7280;border-color:#d1d5db;cursor:not-allowed}
.actions{display:flex;gap:.75rem;justify-content:center;flex-wrap:wrap}
.fine{font-size:.85rem;color:var(--fg3);margin-top:.75rem}
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr))}
.card{background:var(--surface);border:1px solid var(--border);border-radius:.75rem;padding:1.5rem;display:flex;flex-direction:column}
.card img{border-radius:.5rem;margin-bottom:1rem;aspect-ratio:16/9;object-fit:cover;width:100%}
.card .meta{font-size:.85rem;color:var(--fg3);margin-bottom:.5rem}
.card .more{margin-top:auto;font-weight:600}
.quote{border-left:4px solid var(--terracotta);padding-left:1rem;font-style:italic;color:var(--fg2);margin:1.5rem 0}
.faq details{background:var(--surface);border:1px solid var(--border);border-radius:.5rem;padding:1rem 1.25rem;margin-bottom:.75rem}
.faq summary{cursor:pointer;font-weight:600}
.faq details p,.faq details ul{margin-top:.75rem}
.cta{background:var(--sage);color:#fff;text-align:center}
.cta h2,.cta p{color:#fff}
.cta .btn-primary{background:#fff;color:var(--sage)}
.cta .fine{color:#dfe8e1}
.article img.feature{border-radius:.75rem;margin-bottom:1.5rem;width:100%}
.article .content p{font-size:1.075rem}
.notice{background:#fef2f2;border:1px solid #fecaca;color:var(--danger);border-radius:.5rem;padding:1rem;margin-bottom:1.5rem}
.empty{text-align:center;color:var(--fg2)}
footer{background:var(--sage-dark);color:#e5ece7;margin-top:auto}
footer .cols{display:grid;gap:2rem;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr))}
footer h3{color:#fff}
footer a{color:#cfdcd2}
footer ul{list-style:none;margin:0}
footer .legal{border-top:1px solid #4d6a57;margin-top:2rem;padding-top:1.5rem;text-align:center;font-size:.85rem}
form.stack{display:flex;flex-direction:column;gap:1rem;max-width:40rem}
form.stack label{font-weight:600;font-size:.9rem}
form.stack input[type=text],form.stack input[type=email],form.stack input[type=password],form.stack textarea{width:100%;padding:.65rem .8rem;border:1px solid #d1d5db;border-radius:.5rem;font:inherit}
form.stack textarea{min-height:18rem}
form.stack .invalid{border-color:#fca5a5}
.field-error{color:var(--danger);font-size:.85rem}
.hint{color:var(--fg3);font-size:.85rem}
table.posts{width:100%;border-collapse:collapse;background:var(--surface)}
table.posts td,table.posts th{padding:.85rem;border-bottom:1px solid var(--border);text-align:left;vertical-align:top}
table.posts td.row-actions{white-space:nowrap}
table.posts img{width:4rem;height:4rem;object-fit:cover;border-radius:.35rem}
.modal-backdrop{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center;padding:1rem;z-index:60}
.modal{background:var(--surface);border-radius:.75rem;padding:1.5rem;max-width:28rem;width:100%}
.modal .phrase{font-family:ui-monospace,Menlo,monospace;background:#f3f4f6;padding:.1rem .35rem;border-radius:.25rem}
"#;

/// Navigation entries of the public site, in display order.
pub const NAVIGATION: [(&str, &str); 6] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Services", "/services"),
    ("FAQ", "/faq"),
    ("Insights", "/blog"),
    ("Contact", "/contact"),
];

/// Per-request context every public page needs.
pub struct Chrome<'a> {
    pub site: &'a SiteConfig,
    /// Request path, used for the active nav entry and the canonical URL.
    pub path: &'a str,
    pub signed_in: bool,
}

impl Chrome<'_> {
    fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.path == "/"
        } else {
            self.path.starts_with(href)
        }
    }
}

/// Wrap markup in a 200-or-other HTML response.
pub fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

/// "January 5, 2025"
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "Jan 5, 2025, 09:30 AM"
pub fn short_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn head(site: &SiteConfig, title: &str, description: &str, canonical: &str) -> Markup {
    let full_title = if title.is_empty() {
        site.name.clone()
    } else {
        format!("{title} | {}", site.name)
    };

    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (full_title) }
            meta name="description" content=(description);
            link rel="canonical" href=(canonical);
            meta property="og:title" content=(full_title);
            meta property="og:description" content=(description);
            meta property="og:url" content=(canonical);
            meta property="og:site_name" content=(site.name);
            style { (PreEscaped(SITE_CSS)) }
        }
    }
}

/// External booking link styled as a button.
pub fn booking_button(site: &SiteConfig, label: &str, class: &str) -> Markup {
    html! {
        a class=(format!("btn {class}")) href=(site.booking_url) target="_blank" rel="noopener noreferrer" {
            (label)
        }
    }
}

/// Closing call-to-action band shared by the public pages.
pub fn call_to_action(site: &SiteConfig, heading: &str, text: &str, fine: &str) -> Markup {
    html! {
        section class="cta" {
            div class="section narrow" {
                h2 { (heading) }
                p { (text) }
                (booking_button(site, "Book Your Free Consultation", "btn-primary"))
                p class="fine" { (fine) }
            }
        }
    }
}

/// Full public page.
pub fn layout(chrome: &Chrome<'_>, title: &str, description: &str, body: Markup) -> Markup {
    let site = chrome.site;
    let canonical = format!("{}{}", site.url, chrome.path);

    html! {
        (DOCTYPE)
        html lang="en" {
            (head(site, title, description, &canonical))
            body {
                a class="skip" href="#main-content" { "Skip to main content" }
                nav class="top" aria-label="Main navigation" {
                    div class="nav-inner" {
                        a class="brand" href="/" { (site.name) }
                        div class="nav-links" {
                            @for (name, href) in NAVIGATION {
                                @if chrome.is_active(href) {
                                    a class="active" href=(href) aria-current="page" { (name) }
                                } @else {
                                    a href=(href) { (name) }
                                }
                            }
                            (booking_button(site, "Book Consultation", "btn-primary"))
                            @if chrome.signed_in {
                                a href="/me/admin/dashboard" { "Admin" }
                                form class="inline-form" method="post" action="/me/admin/logout" {
                                    button class="link-button" type="submit" { "Sign Out" }
                                }
                            }
                        }
                    }
                }
                main id="main-content" { (body) }
                (footer(site))
            }
        }
    }
}

fn footer(site: &SiteConfig) -> Markup {
    let year = Utc::now().format("%Y").to_string();
    html! {
        footer {
            div class="section" {
                div class="cols" {
                    div {
                        h3 { "Contact" }
                        p { "Maraam Haque, RP (Qualifying)" }
                        p { "Registered Psychotherapist" }
                        a href=(site.booking_url) target="_blank" rel="noopener noreferrer" { "Book Consultation" }
                    }
                    div {
                        h3 { "Quick Links" }
                        ul {
                            @for (name, href) in NAVIGATION.iter().skip(1) {
                                li { a href=(href) { (name) } }
                            }
                        }
                    }
                    div {
                        h3 { "Practice" }
                        p { "Serving Ontario, Canada" }
                        p { "Virtual Sessions Available" }
                        p { "2SLGBTQIA+ & Neurodivergent Affirming" }
                    }
                }
                div class="legal" {
                    p { "© " (year) " Maraam Haque. All rights reserved." }
                    p {
                        "This website is not for emergencies. If you are in crisis, please contact 911 or go to your nearest emergency room."
                    }
                }
            }
        }
    }
}

/// Page for the admin area: no public nav, a slim header with sign-out.
pub fn admin_layout(site: &SiteConfig, title: &str, email: Option<&str>, body: Markup) -> Markup {
    let canonical = format!("{}/me/admin", site.url);
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(site, title, "Admin area", &canonical))
            body {
                nav class="top" aria-label="Admin navigation" {
                    div class="nav-inner" {
                        a class="brand" href="/" { (site.name) }
                        div class="nav-links" {
                            @if let Some(email) = email {
                                a href="/me/admin/dashboard" { "Dashboard" }
                                a href="/me/admin/create" { "New Post" }
                                a href="/" { "View Main Site" }
                                a href=(site.booking_url) target="_blank" rel="noopener noreferrer" { "Booking Platform" }
                                span class="hint" { (email) }
                                form class="inline-form" method="post" action="/me/admin/logout" {
                                    button class="link-button" type="submit" { "Sign Out" }
                                }
                            } @else {
                                a href="/" { "Back to Site" }
                            }
                        }
                    }
                }
                main id="main-content" { (body) }
            }
        }
    }
}

/// Standalone error page, used where no site context is at hand.
pub fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                main {
                    div class="section narrow empty" {
                        h1 { (title) }
                        p { (message) }
                        a class="btn btn-primary" href="/" { "Go Home" }
                    }
                }
            }
        }
    }
}
