//! Landing page content.

/// Hero banner
#[derive(Debug, Clone)]
pub struct HeroContent {
    pub eyebrow: String,
    pub headline: String,
    pub tagline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub background_image: String,
    pub highlights: Vec<String>,
}

/// A titled selling point with an icon
#[derive(Debug, Clone)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WhyChooseContent {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<Feature>,
    pub image: String,
    pub image_caption: String,
    pub cta_title: String,
    pub cta_body: String,
    pub cta_text: String,
}

#[derive(Debug, Clone)]
pub struct PortfolioImage {
    pub file: String,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct ShowcaseContent {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<PortfolioImage>,
}

#[derive(Debug, Clone)]
pub struct Offering {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct OfferingsContent {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub offerings: Vec<Offering>,
}

#[derive(Debug, Clone)]
pub struct AboutContent {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: String,
    pub couple: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct TestimonialsContent {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub commitments: Vec<String>,
}

/// One input of the consultation form
#[derive(Debug, Clone)]
pub struct FormField {
    /// Wire name, also used as the element id
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub placeholder: String,
    pub required: bool,
}

impl FormField {
    fn new(name: &str, label: &str, input_type: &str, placeholder: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type: input_type.to_string(),
            placeholder: placeholder.to_string(),
            required,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactContent {
    pub banner: String,
    pub title: String,
    pub promise: String,
    pub pitch: String,
    pub fields: Vec<FormField>,
    pub submit_text: String,
    pub submitting_text: String,
    pub response_note: String,
    pub success_title: String,
    pub success_body: String,
    pub error_title: String,
    pub error_body: String,
    pub idle_note: String,
}

/// Everything rendered on the landing page
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub why_choose: WhyChooseContent,
    pub showcase: ShowcaseContent,
    pub offerings: OfferingsContent,
    pub about: AboutContent,
    pub testimonials: TestimonialsContent,
    pub contact: ContactContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero: HeroContent {
                eyebrow: "\u{2728} Passionate Photographers Making Magic Happen".to_string(),
                headline: "Exceptional Wedding Photography".to_string(),
                tagline: "Turn Your Dream Wedding Into Timeless Art".to_string(),
                subheadline: "Los Angeles' most sought-after luxury wedding photographers. Limited availability for 2025-2026.".to_string(),
                cta_text: "Book Free Consultation \u{2192}".to_string(),
                background_image: "EAWedding-00953.jpg".to_string(),
                highlights: vec!["Exceptional Quality".to_string(), "Crafting Memories".to_string()],
            },
            why_choose: WhyChooseContent {
                title: "Why Couples Choose Sol Imagery".to_string(),
                subtitle: "Discover what sets us apart in the world of luxury wedding photography".to_string(),
                features: vec![
                    Feature::new("\u{1F48E}", "Uncompromising Quality", "Fresh perspective with meticulous attention to every detail that matters most"),
                    Feature::new("\u{1F91D}", "Personalized Service", "We focus on a select number of couples to ensure exceptional attention"),
                    Feature::new("\u{1F3D9}\u{FE0F}", "Los Angeles Experts", "Deep local knowledge of LA's most stunning venues, from intimate gardens to luxury estates"),
                    Feature::new("\u{2728}", "Satisfaction Guarantee", "If you're not completely thrilled, we'll make it right"),
                ],
                image: "EAWedding-00805.jpg".to_string(),
                image_caption: "\u{201C}Creating timeless memories for extraordinary couples\u{201D}".to_string(),
                cta_title: "Ready to Begin Your Journey?".to_string(),
                cta_body: "Join couples who've chosen Sol Imagery to capture their most precious moments".to_string(),
                cta_text: "Start Your Story".to_string(),
            },
            showcase: ShowcaseContent {
                eyebrow: "portfolio highlights".to_string(),
                title: "Our Featured Work".to_string(),
                subtitle: "A curated selection featuring Evelyn & Angel's special day and our most cherished moments of artistry".to_string(),
                images: [
                    ("EAWedding-00848.jpg", "Wedding detail"),
                    ("EA-06043.jpg", "Couple portrait"),
                    ("EAWedding-00996.jpg", "Wedding moment"),
                    ("EA-06372.jpg", "Romantic moment"),
                    ("EAWedding-01079.jpg", "Intimate moment"),
                ]
                .into_iter()
                .map(|(file, alt)| PortfolioImage { file: file.to_string(), alt: alt.to_string() })
                .collect(),
            },
            offerings: OfferingsContent {
                eyebrow: "tailored for you".to_string(),
                title: "Your Perfect Experience".to_string(),
                subtitle: "From intimate ceremonies to grand celebrations, we craft each moment with artistry designed around your unique vision".to_string(),
                offerings: [
                    ("Weddings", "Luxury wedding photography that captures the essence of your special day with timeless elegance."),
                    ("Portraits", "Sophisticated portrait sessions that reveal your authentic self through artistic vision."),
                    ("Engagements", "Romantic engagement sessions that celebrate your love story in beautiful locations."),
                ]
                .into_iter()
                .map(|(title, description)| Offering { title: title.to_string(), description: description.to_string() })
                .collect(),
            },
            about: AboutContent {
                eyebrow: "the sol imagery team".to_string(),
                title: "Behind The Lens".to_string(),
                subtitle: "Meet the passionate artists dedicated to capturing your most precious moments".to_string(),
                image: "EAWedding-01073.jpg".to_string(),
                body: "We are a team of talented photographers dedicated to capturing the heart of your story. \
                       We believe in creating more than just beautiful photos; we strive to encapsulate the true essence of your moments. \
                       From candid smiles to grand celebrations, our collective expertise ensures every detail is thoughtfully documented. \
                       With a seamless blend of creativity and professionalism, we make your experience enjoyable and your memories unforgettable."
                    .to_string(),
            },
            testimonials: TestimonialsContent {
                eyebrow: "testimonials".to_string(),
                title: "What Our Couples Say".to_string(),
                subtitle: "Hear from the couples who trusted us to capture their most important day".to_string(),
                stats: [("5\u{2B50}", "Quality Rating"), ("100%", "Satisfaction"), ("24hr", "Response Time")]
                    .into_iter()
                    .map(|(value, label)| Stat { value: value.to_string(), label: label.to_string() })
                    .collect(),
                testimonials: [
                    ("Sol Imagery exceeded our expectations! Their fresh approach and attention to detail made our day magical.", "SARAH & MICHAEL"),
                    ("Professional, creative, and incredibly passionate. They captured moments we didn't even know were happening!", "JESSICA & DAVID"),
                    ("Amazing quality and service! Their dedication to perfection shows in every single photograph.", "AMANDA & CARLOS"),
                ]
                .into_iter()
                .map(|(quote, couple)| Testimonial {
                    quote: quote.to_string(),
                    couple: couple.to_string(),
                    label: "Recent Client".to_string(),
                })
                .collect(),
                commitments: vec!["Excellence".to_string(), "Creativity".to_string(), "Your Vision".to_string()],
            },
            contact: ContactContent {
                banner: "\u{26A1} NOW ACCEPTING BOOKINGS: Secure Your Date!".to_string(),
                title: "Secure Your Date Today".to_string(),
                promise: "FREE CONSULTATION \u{2022} NO OBLIGATION \u{2022} INSTANT RESPONSE".to_string(),
                pitch: "Don't let your dream wedding photos slip away. Book your free consultation now and let's discuss how to make your vision a reality.".to_string(),
                fields: vec![
                    FormField::new("fullName", "Full Name", "text", "Enter your full name", true),
                    FormField::new("email", "Email Address", "email", "your.email@example.com", true),
                    FormField::new("phone", "Phone Number", "tel", "(555) 123-4567", true),
                    FormField::new("weddingDate", "Wedding Date (Approximate)", "text", "e.g., Fall 2025 or June 2026", false),
                    FormField::new("dreamWedding", "Describe Your Dream Wedding", "textarea", "Tell us about your vision, style, location, or any special details...", false),
                ],
                submit_text: "Secure Your Date".to_string(),
                submitting_text: "Securing Your Date...".to_string(),
                response_note: "\u{26A1} We'll call you within 2 hours to schedule your consultation".to_string(),
                success_title: "Thank You!".to_string(),
                success_body: "Your consultation request has been received successfully!".to_string(),
                error_title: "Oops!".to_string(),
                error_body: "There was an error sending your message. Please try again or contact us directly.".to_string(),
                idle_note: "Join couples who've already booked their dream photographer with Sol Imagery!".to_string(),
            },
        }
    }
}
