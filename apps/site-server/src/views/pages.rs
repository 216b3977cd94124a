//! Informational pages: home, about, services, FAQ, contact, 404.

use maud::{Markup, html};

use sagepath_core::domain::Post;

use super::{Chrome, booking_button, call_to_action, layout, long_date};

/// Teaser length on the home page cards.
const HOME_TEASER_CHARS: usize = 150;

const FINE_PRINT: &str = "No commitment required • Virtual sessions • Serving all of Ontario";

struct Specialization {
    title: &'static str,
    description: &'static str,
}

const SPECIALIZATIONS: [Specialization; 3] = [
    Specialization {
        title: "2SLGBTQIA+ Affirming Therapy",
        description: "A safe space for queer and trans individuals to explore identity, relationships, and personal growth with someone who understands your journey.",
    },
    Specialization {
        title: "Neurodivergent Support",
        description: "Specialized support for ADHD, autism, and other neurodivergent experiences, celebrating your unique perspective while building coping strategies.",
    },
    Specialization {
        title: "Anxiety & Self-Esteem",
        description: "Compassionate guidance for managing anxiety and building authentic self-worth through understanding your personal patterns and strengths.",
    },
];

fn post_card(post: &Post, teaser: String) -> Markup {
    html! {
        article class="card" {
            @if let Some(url) = &post.image_url {
                img src=(url) alt="" loading="lazy";
            }
            p class="meta" { (long_date(&post.created_at)) }
            h3 { a href=(format!("/blog/{}", post.slug)) { (post.title) } }
            p { (teaser) }
            a class="more" href=(format!("/blog/{}", post.slug)) aria-label=(format!("Read more about {}", post.title)) {
                "Read More"
            }
        }
    }
}

pub fn home(chrome: &Chrome<'_>, recent: &[Post]) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "Affirming Therapy for Your " span class="accent" { "Personal Mosaic" } }
                p class="lead" {
                    "Welcome to a safe, affirming space where 2SLGBTQIA+ and neurodivergent individuals can explore their personal mosaic with a therapist who shares their lived experience and truly gets it."
                }
                div class="actions" {
                    (booking_button(site, "Book Free Consultation", "btn-primary"))
                    a class="btn btn-secondary" href="/about" { "Learn About Maraam" }
                }
            }
        }
        section class="section narrow" {
            h2 { "Exploring Your Personal Mosaic" }
            p {
                "We are mosaics of the people around us, the ideas we touch, and the events we experience. Everything you feel is valid. It can be beautiful, but it can also become difficult when caught in patterns of struggle. I'm here to help you understand and connect with yourself, no matter what stage of your healing journey you're on."
            }
        }
        section class="section" {
            h2 { "How I Can Support You" }
            p { "Specialized, affirming care tailored to your unique experience and identity" }
            div class="grid" {
                @for item in &SPECIALIZATIONS {
                    div class="card" {
                        h3 { (item.title) }
                        p { (item.description) }
                        a class="more" href="/services" aria-label=(format!("Learn more about {}", item.title)) { "Learn More" }
                    }
                }
            }
        }
        @if !recent.is_empty() {
            section class="section" {
                h2 { "Latest Insights" }
                p {
                    "Educational content to help you understand patterns, connect with yourself, and navigate your healing journey"
                }
                div class="grid" {
                    @for post in recent {
                        (post_card(post, post.teaser(HOME_TEASER_CHARS)))
                    }
                }
                p { a class="btn btn-secondary" href="/blog" { "View All Insights" } }
            }
        }
        (call_to_action(
            site,
            "Ready to Begin Your Journey?",
            "Take the first step towards understanding yourself better. Book a free 30-minute consultation to see if we're a good fit.",
            FINE_PRINT,
        ))
    };

    layout(
        chrome,
        "",
        "Affirming psychotherapy for 2SLGBTQIA+ and neurodivergent individuals in Ontario. Book a free 30-minute consultation.",
        body,
    )
}

pub fn about(chrome: &Chrome<'_>) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "Hello, I'm " span class="accent" { "Maraam" } }
                p class="lead" {
                    "I'm a person-first therapist who continues to be amazed by the human condition: the range of emotions, thoughts, perceptions, and narratives that we carry and share."
                }
                (booking_button(site, "Book Free Consultation", "btn-primary"))
            }
        }
        section class="section narrow" {
            h2 { "My Journey to Affirming Therapy" }
            p {
                "We are mosaics of the people around us, the ideas we touch, and the events that we experience. Which brings us to become a part of the mosaic of the human race. Everything you feel is valid. It can be beautiful, but it can also become a difficult sentence when caught in patterns of difficulty."
            }
            p {
                "Pride month has always been something of awe for me. To be celebrating and calling people in from various walks of life, to just be simply human. My first personal call in to my own sexuality was my 8th grade teacher asking me, very open-endedly, whether I had ever thought about my sexuality, and saying that whatever it is, it's okay."
            }
            p {
                "I returned to that question in university, when more friends started to ask me again: had I thought about my sexuality and gender? I finally asked myself and found answers, with the help of learning about history, connecting with media and authors who wrote under pen names to share their stories."
            }
            p {
                "We can only meet each other as far as we meet ourselves, and I am so grateful to the people who called me in to who I truly am."
            }
            blockquote class="quote" {
                "\"You are always enough. Whether your lived experience makes it hard to find community, to celebrate with ease, or feel in contact with your full potential, you are enough.\""
            }
        }
        section class="section narrow" {
            h2 { "My Therapeutic Approach" }
            p {
                "I approach therapy with respect for the richness that diversity brings, understanding that cultural nuances play a vital role in mental health and well-being. I'm deeply committed to creating a therapeutic space that embraces diversity, fosters cultural sensitivity, and prioritizes your well-being."
            }
            p {
                "Together, we'll create a safe and inclusive space where you can explore your thoughts, emotions, and challenges without fear of judgment. My goal is to facilitate a sense of relief and resilience as we work towards identifying strengths, coping strategies, and solutions that align with your unique values and cultural context."
            }
            h2 { "My Clinical Focus" }
            p {
                "My clinical focus is on those who experience " strong { "anxiety, self-esteem challenges" } " and struggle to embody a lot of their emotional experience. These experiences are deeply personal to people, and I see a wide spectrum of unique folks who face a few core issues: chronic challenges and neglect that have led them to prioritize others first."
            }
            p {
                "Understanding ourselves without judgement, with an open-minded curiosity, can get us much closer to ourselves and meeting our needs in an informed, direct, meaningful and sustainable way. By learning to appreciate past methods of coping, we can also develop new skills to live in a more integrated and holistic way."
            }
            h2 { "Part of Their Collective" }
            p {
                "I'm proud to be part of " strong { "Their Collective" } ", a network of practitioners in Canada who are licensed mental health professionals, ADHD/Autism coaches, or speech and language pathologists who are queer, transgender, ADHD, and/or autistic, focusing our work on affirming, affordable, and accessible services for our community."
            }
        }
        (call_to_action(
            site,
            "Ready to Connect?",
            "Let's explore your personal mosaic together. Book a free 30-minute consultation to see if we're a good fit for your healing journey.",
            FINE_PRINT,
        ))
    };

    layout(
        chrome,
        "About Maraam Haque",
        "Learn about Maraam Haque, RP (Qualifying), a registered psychotherapist specializing in 2SLGBTQIA+ and neurodivergent affirming therapy in Ontario.",
        body,
    )
}

const APPROACHES: [(&str, &str); 4] = [
    (
        "Person-Centered Therapy",
        "Focusing on your inherent capacity for growth and self-understanding in a non-judgmental environment.",
    ),
    (
        "Culturally Responsive Care",
        "Integrating your cultural background, identity, and values into our therapeutic work together.",
    ),
    (
        "Strength-Based Approach",
        "Building on your existing strengths and resilience while developing new coping strategies.",
    ),
    (
        "Trauma-Informed Practice",
        "Understanding how past experiences shape present challenges with safety and empowerment.",
    ),
];

const SESSION_DETAILS: [&str; 6] = [
    "Free 30-minute initial consultation",
    "Virtual sessions via secure video platform",
    "Flexible scheduling to accommodate your needs",
    "Serving all clients across Ontario",
    "Sessions typically 50 minutes in length",
    "Regular check-ins to assess progress",
];

pub fn services(chrome: &Chrome<'_>) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "My Approach & " span class="accent" { "Services" } }
                p class="lead" {
                    "Compassionate, affirming therapy tailored to your unique experience. Together, we'll explore your personal mosaic and develop strategies that honor your identity and support your growth."
                }
                (booking_button(site, "Book Free Consultation", "btn-primary"))
            }
        }
        section class="section" {
            h2 { "My Therapeutic Approach" }
            p {
                "I believe in creating a space where you can explore your thoughts, emotions, and challenges without fear of judgment, building on your strengths while honoring your unique perspective."
            }
            div class="grid" {
                @for (title, description) in APPROACHES {
                    div class="card" {
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
        section class="section" {
            h2 { "Areas of Specialization" }
            div class="grid" {
                @for item in &SPECIALIZATIONS {
                    div class="card" {
                        h3 { (item.title) }
                        p { (item.description) }
                    }
                }
            }
        }
        section class="section narrow" {
            h2 { "How We'll Work Together" }
            h3 { "Session Details" }
            ul {
                @for detail in SESSION_DETAILS {
                    li { (detail) }
                }
            }
        }
        (call_to_action(
            site,
            "Ready to Begin Your Healing Journey?",
            "Let's explore how I can support you in understanding and connecting with yourself. Book your free consultation today.",
            FINE_PRINT,
        ))
    };

    layout(
        chrome,
        "My Approach & Services",
        "Learn about Maraam's therapeutic approach and specialized services for 2SLGBTQIA+ individuals, neurodivergent support, anxiety, and self-esteem counselling.",
        body,
    )
}

const FAQ_ITEMS: [(&str, &str); 10] = [
    (
        "What does 'Registered Psychotherapist (Qualifying)' mean?",
        "As a Registered Psychotherapist (Qualifying), I am completing my Master of Arts in Counselling Psychology while practicing under supervision, working toward full registration with the College of Registered Psychotherapists of Ontario (CRPO).",
    ),
    (
        "How does the free consultation work?",
        "The free 30-minute consultation is an opportunity for us to get to know each other and determine if we're a good fit. There's no pressure or commitment.",
    ),
    (
        "Do you offer in-person or virtual sessions?",
        "I currently offer virtual sessions via a secure video platform, serving clients throughout Ontario.",
    ),
    (
        "What are your rates and do you accept insurance?",
        "Please contact me during your free consultation to discuss current rates and payment options. Many extended health insurance plans cover psychotherapy services.",
    ),
    (
        "How long are sessions and how often do we meet?",
        "Sessions are typically 50 minutes long. The frequency depends on your individual needs and goals, and we'll work together to find a schedule that supports your growth and fits your life.",
    ),
    (
        "Do you have experience with 2SLGBTQIA+ and neurodivergent clients?",
        "Yes, absolutely. As someone who shares lived experience within these communities, I bring both personal understanding and professional training to support 2SLGBTQIA+ and neurodivergent individuals.",
    ),
    (
        "How do I know if therapy is right for me?",
        "Therapy can be beneficial for anyone looking to better understand themselves, develop coping strategies, or work through challenges. You don't need to be in crisis to benefit from therapy.",
    ),
    (
        "What if I'm not sure about my gender or sexuality?",
        "Questioning and exploring your identity is a completely normal and valid experience. There's no pressure to label yourself or come to any particular conclusions.",
    ),
    (
        "What should I do in a mental health emergency?",
        "If you are experiencing a mental health emergency or having thoughts of self-harm, please call 911 or go to your nearest emergency room. Email and online contact forms are not monitored 24/7.",
    ),
    (
        "How do I book a session or consultation?",
        "You can book your free 30-minute consultation or ongoing sessions through the online booking platform, which shows available times in real-time.",
    ),
];

pub fn faq(chrome: &Chrome<'_>) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "Frequently Asked " span class="accent" { "Questions" } }
                p class="lead" {
                    "Everything you need to know about starting therapy and working together. Can't find what you're looking for? Feel free to ask during your free consultation."
                }
                (booking_button(site, "Book Free Consultation", "btn-primary"))
            }
        }
        section class="section narrow faq" {
            @for (question, answer) in FAQ_ITEMS {
                details {
                    summary { (question) }
                    p { (answer) }
                }
            }
        }
        (call_to_action(
            site,
            "Still Have Questions?",
            "I'm here to help you understand how therapy can support your journey",
            FINE_PRINT,
        ))
    };

    layout(
        chrome,
        "Frequently Asked Questions",
        "Common questions about therapy with Maraam Haque, including information about qualifications, sessions, rates, and specialized support for 2SLGBTQIA+ and neurodivergent clients.",
        body,
    )
}

pub fn contact(chrome: &Chrome<'_>) -> Markup {
    let site = chrome.site;
    let body = html! {
        section class="hero" {
            div class="section narrow" {
                h1 { "Contact & " span class="accent" { "Booking" } }
                p class="lead" {
                    "Ready to begin your healing journey? I'm here to answer your questions and help you take the first step toward growth and self-understanding."
                }
            }
        }
        section class="section narrow" {
            h2 { "Book Your Free Consultation" }
            p { "The easiest way to get started is through my online booking platform" }
            div class="card" {
                h3 { "30-Minute Free Consultation" }
                p {
                    "Let's get to know each other and see if we're a good fit. During this call, we'll discuss your goals, my approach, and answer any questions you have, with no pressure or commitment."
                }
                (booking_button(site, "Book on JaneApp", "btn-primary"))
                p class="fine" { "Secure online booking • Available times shown in real-time" }
            }
        }
        section class="section" {
            h2 { "Other Ways to Connect" }
            div class="grid" {
                div class="card" {
                    h3 { "Email" }
                    p { "For non-urgent questions about therapy, booking, or general inquiries." }
                    a href="mailto:hello@maaraamhaque.com" { "hello@maaraamhaque.com" }
                }
                div class="card" {
                    h3 { "Service Area" }
                    p { "Virtual sessions available throughout Ontario, Canada." }
                }
                div class="card" {
                    h3 { "Availability" }
                    p { "Flexible scheduling to accommodate your needs, including evening and weekend options." }
                }
            }
        }
        (call_to_action(
            site,
            "Take the First Step Today",
            "Your healing journey starts with a single step. I'm here to walk alongside you as you explore your personal mosaic and develop the tools you need to thrive.",
            "No commitment required • 30 minutes free • Virtual sessions across Ontario",
        ))
    };

    layout(
        chrome,
        "Contact & Booking",
        "Get in touch with Maraam Haque, RP (Qualifying) to book your free consultation or ask questions about therapy services in Ontario.",
        body,
    )
}

pub fn not_found(chrome: &Chrome<'_>) -> Markup {
    let body = html! {
        section class="section narrow empty" {
            h1 { "Page Not Found" }
            p { "The page you are looking for does not exist or has been moved." }
            div class="actions" {
                a class="btn btn-primary" href="/" { "Go Home" }
                a class="btn btn-secondary" href="/blog" { "Read Insights" }
            }
        }
    };
    layout(chrome, "Page Not Found", "This page could not be found.", body)
}
