//! Blog index and post pages.

use maud::{Markup, html};

use sagepath_core::domain::Post;

use super::{Chrome, booking_button, call_to_action, layout, long_date};

/// Excerpt length on the blog index.
const INDEX_EXCERPT_CHARS: usize = 200;

/// Characters of content used as the post page description.
const DESCRIPTION_CHARS: usize = 160;

/// `posts` is `None` when the listing could not be loaded.
pub fn index(chrome: &Chrome<'_>, posts: Option<&[Post]>) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "Insights & " span class="accent" { "Resources" } }
                p class="lead" {
                    "Educational content to help you understand patterns, connect with yourself, and navigate your healing journey, no matter what stage you're on."
                }
                (booking_button(site, "Book Free Consultation", "btn-primary"))
            }
        }
        section class="section" {
            @match posts {
                None => {
                    div class="notice empty" role="alert" {
                        p { "Failed to load blog posts. Please try again later." }
                        a class="btn btn-secondary" href="/blog" { "Try Again" }
                    }
                }
                Some([]) => {
                    div class="empty" {
                        h2 { "No Posts Yet" }
                        p {
                            "I'm working on creating valuable content for you. Check back soon for insights on mental health, personal growth, and navigating life's challenges."
                        }
                        (booking_button(site, "Book a Consultation", "btn-primary"))
                    }
                }
                Some(posts) => {
                    div class="grid" {
                        @for post in posts {
                            article class="card" {
                                @if let Some(url) = &post.image_url {
                                    img src=(url) alt="" loading="lazy";
                                }
                                p class="meta" { (long_date(&post.created_at)) }
                                h3 { a href=(format!("/blog/{}", post.slug)) { (post.title) } }
                                p { (post.excerpt(INDEX_EXCERPT_CHARS).into_owned()) }
                                a class="more" href=(format!("/blog/{}", post.slug)) aria-label=(format!("Read more about {}", post.title)) {
                                    "Read More"
                                }
                            }
                        }
                    }
                }
            }
        }
        section class="section narrow" {
            h2 { "Stay Connected" }
            p {
                "Want to be notified when I publish new insights and resources? Connect directly and learn about my latest insights during our conversation, or "
                a href="/contact" { "get in touch" }
                " with a topic you'd like me to address."
            }
        }
        (call_to_action(
            site,
            "Ready to Begin Your Journey?",
            "Reading about mental health is a great start. Taking action is even better. Book your free consultation to see how I can support your growth.",
            "No commitment required • Virtual sessions • Serving all of Ontario",
        ))
    };

    layout(
        chrome,
        "Insights & Resources",
        "Educational content and insights on mental health, 2SLGBTQIA+ issues, neurodivergent experiences, and personal growth from Maraam Haque, RP (Qualifying).",
        body,
    )
}

pub fn post(chrome: &Chrome<'_>, post: &Post) -> Markup {
    let site = chrome.site;
    let description: String = post.content.chars().take(DESCRIPTION_CHARS).collect();
    let body = html! {
        article class="section narrow article" {
            p { a href="/blog" aria-label="Back to all insights" { "← Back to Insights" } }
            h1 { (post.title) }
            p class="hint" {
                "Published "
                time datetime=(post.created_at.to_rfc3339()) { (long_date(&post.created_at)) }
            }
            @if let Some(url) = &post.image_url {
                a href=(url) target="_blank" rel="noopener noreferrer" {
                    img class="feature" src=(url) alt="";
                }
            }
            div class="content" {
                @for paragraph in post.paragraphs() {
                    p { (paragraph) }
                }
            }
        }
        section class="section narrow" {
            div class="card" {
                h3 { "About Maraam Haque" }
                p {
                    "Maraam is a Registered Psychotherapist (Qualifying) specializing in affirming therapy for 2SLGBTQIA+ and neurodivergent individuals. She creates educational content to help people understand patterns and connect with themselves, no matter what stage of their healing journey they're on."
                }
                div class="actions" {
                    a class="btn btn-secondary" href="/about" { "Learn More About Maraam" }
                    (booking_button(site, "Book a Consultation", "btn-primary"))
                }
            }
        }
    };

    layout(chrome, &post.title, &description, body)
}
