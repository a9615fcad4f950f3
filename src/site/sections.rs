//! Section renderers for the landing page.

use crate::core::html_escape;
use crate::core::page_state::FormStatus;
use crate::models::BusinessProfile;
use crate::site::content::{
    AboutContent, ContactContent, FormField, HeroContent, OfferingsContent, ShowcaseContent,
    TestimonialsContent, WhyChooseContent,
};

/// Anchors linked from the navigation, in page order
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "HOME"),
    ("showcase", "OUR WORK"),
    ("offerings", "OFFERINGS"),
    ("about", "ABOUT"),
];

fn image_url(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file)
}

fn section_header(eyebrow: &str, title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="section-header">
        <p class="eyebrow">{}</p>
        <h2>{}</h2>
        <div class="rule"></div>
        <p class="section-subtitle">{}</p>
    </header>"#,
        html_escape(eyebrow),
        html_escape(title),
        html_escape(subtitle)
    )
}

/// Fixed navigation bar plus the mobile overlay
pub fn render_nav(profile: &BusinessProfile, image_base: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(anchor, label)| format!(r##"<a href="#{}" class="nav-link">{}</a>"##, anchor, label))
        .collect();
    let overlay_links: String = NAV_LINKS
        .iter()
        .chain(std::iter::once(&("contact", "BOOK NOW")))
        .map(|(anchor, label)| format!(r##"<a href="#{}" class="overlay-link" data-close-menu>{}</a>"##, anchor, label))
        .collect();

    format!(
        r##"<nav class="site-nav" data-nav>
    <div class="nav-inner">
        <a href="#home" class="brand"><img src="{logo}" alt="{brand}" class="brand-logo"></a>
        <div class="nav-links">{links}<a href="#contact" class="nav-cta">BOOK NOW</a></div>
        <button type="button" class="menu-toggle" aria-label="Toggle mobile menu" aria-expanded="false" data-menu-toggle>
            <span class="menu-icon"></span>
        </button>
    </div>
</nav>
<div class="mobile-overlay" data-menu hidden>
    <nav class="overlay-nav">{overlay_links}</nav>
</div>"##,
        logo = html_escape(&image_url(image_base, "sol-imagery-logo-gold.png")),
        brand = html_escape(&profile.brand_name),
    )
}

/// Render the hero banner section.
pub fn render_hero(content: &HeroContent, image_base: &str) -> String {
    let highlights = content
        .highlights
        .iter()
        .map(|h| format!("<span>{}</span>", html_escape(h)))
        .collect::<Vec<_>>()
        .join(r#"<span class="dot">&bull;</span>"#);

    format!(
        r##"<section id="home" class="hero" data-section="home">
    <img src="{}" alt="Elegant wedding photography" class="hero-background">
    <div class="hero-content">
        <span class="eyebrow">{}</span>
        <h1 class="hero-headline">{}</h1>
        <p class="hero-tagline">{}</p>
        <p class="hero-subheadline">{}</p>
        <a href="#contact" class="hero-cta">{}</a>
        <div class="hero-highlights">{}</div>
    </div>
    <a href="#why-choose" class="scroll-indicator" aria-label="Scroll down">&darr;</a>
</section>"##,
        html_escape(&image_url(image_base, &content.background_image)),
        html_escape(&content.eyebrow),
        html_escape(&content.headline),
        html_escape(&content.tagline),
        html_escape(&content.subheadline),
        html_escape(&content.cta_text),
        highlights
    )
}

pub fn render_why_choose(content: &WhyChooseContent, image_base: &str) -> String {
    let features: String = content
        .features
        .iter()
        .map(|f| {
            format!(
                r#"<article class="feature">
            <span class="feature-icon">{}</span>
            <h3>{}</h3>
            <p>{}</p>
        </article>"#,
                html_escape(&f.icon),
                html_escape(&f.title),
                html_escape(&f.description)
            )
        })
        .collect();

    format!(
        r##"<section id="why-choose" class="why-choose scroll-animate" data-section="why-choose">
    <header class="section-header">
        <h2>{title}</h2>
        <div class="rule"></div>
        <p class="section-subtitle">{subtitle}</p>
    </header>
    <div class="why-grid">
        {features}
        <figure class="why-image">
            <img src="{image}" alt="Elegant wedding moment">
            <figcaption>{caption}</figcaption>
        </figure>
    </div>
    <div class="why-cta">
        <h3>{cta_title}</h3>
        <p>{cta_body}</p>
        <a href="#contact" class="button">{cta_text} &rarr;</a>
    </div>
</section>"##,
        title = html_escape(&content.title),
        subtitle = html_escape(&content.subtitle),
        features = features,
        image = html_escape(&image_url(image_base, &content.image)),
        caption = html_escape(&content.image_caption),
        cta_title = html_escape(&content.cta_title),
        cta_body = html_escape(&content.cta_body),
        cta_text = html_escape(&content.cta_text),
    )
}

pub fn render_showcase(content: &ShowcaseContent, image_base: &str) -> String {
    let images: String = content
        .images
        .iter()
        .map(|img| {
            format!(
                r#"<img src="{}" alt="{}" class="showcase-image" loading="lazy">"#,
                html_escape(&image_url(image_base, &img.file)),
                html_escape(&img.alt)
            )
        })
        .collect();

    format!(
        r#"<section id="showcase" class="showcase scroll-animate" data-section="showcase">
    {}
    <div class="showcase-grid">{}</div>
</section>"#,
        section_header(&content.eyebrow, &content.title, &content.subtitle),
        images
    )
}

pub fn render_offerings(content: &OfferingsContent) -> String {
    let offerings: String = content
        .offerings
        .iter()
        .map(|o| {
            format!(
                r#"<article class="offering">
            <h3>{}</h3>
            <p>{}</p>
        </article>"#,
                html_escape(&o.title),
                html_escape(&o.description)
            )
        })
        .collect();

    format!(
        r#"<section id="offerings" class="offerings scroll-animate" data-section="offerings">
    {}
    <div class="offerings-grid">{}</div>
</section>"#,
        section_header(&content.eyebrow, &content.title, &content.subtitle),
        offerings
    )
}

pub fn render_about(content: &AboutContent, image_base: &str) -> String {
    format!(
        r#"<section id="about" class="about scroll-animate" data-section="about">
    {}
    <div class="about-body">
        <img src="{}" alt="Behind the scenes" loading="lazy">
        <p>{}</p>
    </div>
</section>"#,
        section_header(&content.eyebrow, &content.title, &content.subtitle),
        html_escape(&image_url(image_base, &content.image)),
        html_escape(&content.body)
    )
}

/// Render the testimonials section.
pub fn render_testimonials(content: &TestimonialsContent) -> String {
    let stats: String = content
        .stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                html_escape(&s.value),
                html_escape(&s.label)
            )
        })
        .collect();

    let testimonials: String = content
        .testimonials
        .iter()
        .map(|t| {
            format!(
                r#"<article class="testimonial-card">
            <div class="stars" aria-hidden="true">&#11088;&#11088;&#11088;&#11088;&#11088;</div>
            <blockquote class="testimonial-quote">&ldquo;{}&rdquo;</blockquote>
            <p class="testimonial-author">&mdash; {}</p>
            <p class="testimonial-label">{}</p>
        </article>"#,
                html_escape(&t.quote),
                html_escape(&t.couple),
                html_escape(&t.label)
            )
        })
        .collect();

    let commitments = content
        .commitments
        .iter()
        .map(|c| format!("<span>{}</span>", html_escape(c)))
        .collect::<Vec<_>>()
        .join("<span>&bull;</span>");

    format!(
        r#"<section id="testimonials" class="testimonials scroll-animate" data-section="testimonials">
    {}
    <div class="stats">{}</div>
    <div class="testimonials-grid">{}</div>
    <div class="commitments"><span>Committed to:</span>{}</div>
</section>"#,
        section_header(&content.eyebrow, &content.title, &content.subtitle),
        stats,
        testimonials,
        commitments
    )
}

fn render_field(field: &FormField) -> String {
    let required = if field.required { " required" } else { "" };
    let marker = if field.required { " *" } else { "" };
    let name = html_escape(&field.name);
    let placeholder = html_escape(&field.placeholder);

    let input = if field.input_type == "textarea" {
        format!(r#"<textarea id="{name}" name="{name}" rows="3" placeholder="{placeholder}"{required}></textarea>"#)
    } else {
        format!(
            r#"<input type="{}" id="{name}" name="{name}" placeholder="{placeholder}"{required}>"#,
            html_escape(&field.input_type)
        )
    };

    format!(
        r#"<div class="form-field">
            <label for="{name}">{}{marker}</label>
            {input}
        </div>"#,
        html_escape(&field.label)
    )
}

fn render_status_panel(status: FormStatus, content: &ContactContent, profile: &BusinessProfile) -> String {
    let inner = match status {
        FormStatus::Success => format!(
            r#"<h3>{}</h3><p>{}</p><p class="accent">&#128222; We'll call you within 2 hours to schedule your free consultation</p><p>Questions? Call us at {} or send us a message on Instagram.</p>"#,
            html_escape(&content.success_title),
            html_escape(&content.success_body),
            html_escape(&profile.phone_display)
        ),
        FormStatus::Error => format!(
            r#"<h3>{}</h3><p>{}</p>"#,
            html_escape(&content.error_title),
            html_escape(&content.error_body)
        ),
        FormStatus::Idle | FormStatus::Submitting => format!(
            r#"<ul class="trust-signals"><li>&#9889; Fast Response</li><li>&#128142; Premium Service</li><li>&#128222; Free Consultation</li></ul><p>{}</p>"#,
            html_escape(&content.idle_note)
        ),
    };
    let hidden = if status == FormStatus::default() { "" } else { " hidden" };

    format!(
        r#"<div class="form-status" data-form-status="{}"{}>{}</div>"#,
        status.as_str(),
        hidden,
        inner
    )
}

/// Render the consultation form section.
pub fn render_contact(content: &ContactContent, profile: &BusinessProfile) -> String {
    let fields: String = content.fields.iter().map(render_field).collect();
    let panels: String = FormStatus::PANELS
        .iter()
        .map(|status| render_status_panel(*status, content, profile))
        .collect();

    format!(
        r#"<section id="contact" class="contact scroll-animate" data-section="contact">
    <div class="contact-banner">{banner}</div>
    <h2>{title}</h2>
    <div class="rule"></div>
    <p class="contact-promise">{promise}</p>
    <p class="contact-pitch">{pitch}</p>
    <form id="consultation-form" action="/api/contact" method="post" data-status="{idle}" novalidate>
        {fields}
        <button type="submit" data-submit data-label="{submit}" data-busy-label="{submitting}">&#10024; {submit} &rarr;</button>
        <p class="response-note">{note}</p>
        {panels}
    </form>
</section>"#,
        banner = html_escape(&content.banner),
        title = html_escape(&content.title),
        promise = html_escape(&content.promise),
        pitch = html_escape(&content.pitch),
        idle = FormStatus::Idle.as_str(),
        fields = fields,
        submit = html_escape(&content.submit_text),
        submitting = html_escape(&content.submitting_text),
        note = html_escape(&content.response_note),
        panels = panels,
    )
}

pub fn render_footer(profile: &BusinessProfile, offerings: &OfferingsContent, year: i32) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .chain(std::iter::once(&("contact", "CONTACT")))
        .map(|(anchor, label)| format!(r##"<li><a href="#{}">{}</a></li>"##, anchor, title_case(label)))
        .collect();
    let services: String = offerings
        .offerings
        .iter()
        .map(|o| format!(r##"<li><a href="#offerings">{}</a></li>"##, html_escape(&o.title)))
        .collect();
    let brand = html_escape(&profile.brand_name);

    format!(
        r#"<footer class="site-footer">
    <div class="footer-grid">
        <div><h3>Navigation</h3><ul>{nav}</ul></div>
        <div><h3>Services</h3><ul>{services}</ul></div>
        <div><h3>Contact</h3><p>{location}</p><p>E. {email}</p><p>T. {phone}</p></div>
        <div>
            <h3>follow along @{handle}</h3>
            <p>Follow along for inspiration, behind-the-scenes peeks, and the artistry that defines our passion for wedding photography.</p>
            <a href="{instagram}" target="_blank" rel="noopener noreferrer">Instagram &rarr;</a>
        </div>
    </div>
    <p class="copyright">&copy; {year} {brand}. All rights reserved.</p>
</footer>"#,
        location = html_escape(&profile.location),
        email = html_escape(&profile.public_email),
        phone = html_escape(&profile.phone_display),
        handle = html_escape(&profile.instagram_handle),
        instagram = html_escape(&profile.instagram_url),
    )
}

fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
