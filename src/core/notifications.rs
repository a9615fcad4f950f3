use crate::core::html::html_escape;
use crate::models::{BusinessProfile, ConsultationRequest, OutgoingEmail};

const ACCENT: &str = "#ceb07e";

/// Steps promised to the client in the acknowledgment email
pub const NEXT_STEPS: [&str; 4] = [
    "We'll reach out to you within 24 hours to schedule your free consultation",
    "During our call, we'll discuss your vision, timeline, and package options",
    "We'll provide a custom quote tailored to your needs",
    "If you're ready to move forward, we'll secure your date!",
];

/// Builds the two consultation emails
///
/// Submitter text is HTML-escaped in the HTML bodies and copied verbatim into
/// the plain-text alternatives.
#[derive(Debug, Clone)]
pub struct EmailComposer {
    profile: BusinessProfile,
    sender: String,
    business_inbox: String,
}

impl EmailComposer {
    /// # Arguments
    /// * `profile` - Business identity used in signatures and links
    /// * `sender` - Relay mailbox every message is sent from
    /// * `business_inbox` - Operator address receiving new inquiries
    pub fn new(profile: BusinessProfile, sender: impl Into<String>, business_inbox: impl Into<String>) -> Self {
        Self {
            profile,
            sender: sender.into(),
            business_inbox: business_inbox.into(),
        }
    }

    /// Notification to the operator summarizing the inquiry
    pub fn business_notification(&self, request: &ConsultationRequest) -> OutgoingEmail {
        let name = html_escape(&request.full_name);
        let email = html_escape(&request.email);
        let phone = html_escape(&request.phone);

        let wedding_date_html = request
            .wedding_date
            .as_deref()
            .map(|date| paragraph(&format!("<strong>Wedding Date:</strong> {}", html_escape(date))))
            .unwrap_or_default();

        let vision_html = request
            .dream_wedding
            .as_deref()
            .map(|vision| {
                format!(
                    r#"<div style="margin-bottom: 25px;">
  <h2 style="color: #333; font-size: 20px; margin-bottom: 15px; font-weight: 400;">Wedding Vision</h2>
  <div style="background-color: #f8f8f8; padding: 20px; border-radius: 8px; border-left: 4px solid {accent};">
    <p style="margin: 0; color: #555; font-size: 16px; line-height: 1.6; font-style: italic;">&quot;{vision}&quot;</p>
  </div>
</div>"#,
                    accent = ACCENT,
                    vision = html_escape(vision),
                )
            })
            .unwrap_or_default();

        let body = format!(
            r#"{header}
<div style="margin-bottom: 25px;">
  <h2 style="color: #333; font-size: 20px; margin-bottom: 15px; font-weight: 400;">Contact Information</h2>
  {name_line}
  {email_line}
  {phone_line}
  {wedding_date_html}
</div>
{vision_html}
{callout}
<div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; text-align: center;">
  <p style="color: #888; font-size: 14px; margin: 0;">This inquiry was submitted through your {brand} website contact form.</p>
</div>"#,
            header = heading("New Consultation Request"),
            name_line = paragraph(&format!("<strong>Name:</strong> {}", name)),
            email_line = paragraph(&format!(
                r#"<strong>Email:</strong> <a href="mailto:{email}" style="color: {ACCENT}; text-decoration: none;">{email}</a>"#
            )),
            phone_line = paragraph(&format!(
                r#"<strong>Phone:</strong> <a href="tel:{phone}" style="color: {ACCENT}; text-decoration: none;">{phone}</a>"#
            )),
            callout = callout("&#9889; Respond within 2 hours for best results!", "30px 0 0"),
            brand = html_escape(&self.profile.brand_name),
        );

        let mut text = format!(
            "New Consultation Request\n\nName: {}\nEmail: {}\nPhone: {}\n",
            request.full_name, request.email, request.phone
        );
        if let Some(date) = &request.wedding_date {
            text.push_str(&format!("Wedding Date: {}\n", date));
        }
        if let Some(vision) = &request.dream_wedding {
            text.push_str(&format!("\nWedding Vision:\n\"{}\"\n", vision));
        }
        text.push_str(&format!(
            "\nRespond within 2 hours for best results!\n\nThis inquiry was submitted through your {} website contact form.\n",
            self.profile.brand_name
        ));

        OutgoingEmail {
            from: self.sender.clone(),
            to: self.business_inbox.clone(),
            subject: format!("New Wedding Consultation Request from {}", request.full_name),
            html: wrap(&body),
            text,
        }
    }

    /// Acknowledgment to the submitter
    pub fn client_acknowledgment(&self, request: &ConsultationRequest) -> OutgoingEmail {
        let brand = html_escape(&self.profile.brand_name);
        let steps_html: String = NEXT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let margin = if i + 1 < NEXT_STEPS.len() { r#" style="margin-bottom: 8px;""# } else { "" };
                format!("<li{}>{}</li>", margin, html_escape(step))
            })
            .collect();

        let body = format!(
            r#"{header}
<p style="color: #555; font-size: 16px; line-height: 1.6; margin-bottom: 25px;">
  We're thrilled that you're considering {brand} for your special day! Your consultation request has been received, and we can't wait to learn more about your vision.
</p>
<div style="background-color: #f8f8f8; padding: 20px; border-radius: 8px; margin-bottom: 25px;">
  <h2 style="color: #333; font-size: 18px; margin-bottom: 15px; font-weight: 400;">What happens next?</h2>
  <ul style="color: #555; font-size: 16px; line-height: 1.6; margin: 0; padding-left: 20px;">{steps_html}</ul>
</div>
{callout}
<div style="text-align: center; margin-bottom: 25px;">
  <p style="color: #555; font-size: 16px; margin-bottom: 15px;">In the meantime, follow us for inspiration:</p>
  <a href="{instagram_url}" style="display: inline-block; background-color: {ACCENT}; color: white; padding: 12px 24px; text-decoration: none; border-radius: 25px; font-weight: 500;">Follow @{handle}</a>
</div>
<div style="border-top: 1px solid #eee; padding-top: 20px; text-align: center;">
  <p style="color: #888; font-size: 14px; margin: 0;">
    Questions? Reply to this email or call us at <a href="tel:{dial}" style="color: {ACCENT}; text-decoration: none;">{phone}</a>
  </p>
</div>"#,
            header = heading(&format!("Thank You, {}!", html_escape(&request.full_name))),
            callout = callout("&#128222; Expect our call within 2 hours!", "0 0 25px"),
            instagram_url = html_escape(&self.profile.instagram_url),
            handle = html_escape(&self.profile.instagram_handle),
            dial = html_escape(&self.profile.phone_dial),
            phone = html_escape(&self.profile.phone_display),
        );

        let steps_text: String = NEXT_STEPS.iter().map(|step| format!("  - {}\n", step)).collect();
        let text = format!(
            "Thank You, {name}!\n\n\
             We're thrilled that you're considering {brand} for your special day! \
             Your consultation request has been received, and we can't wait to learn more about your vision.\n\n\
             What happens next?\n{steps_text}\n\
             Expect our call within 2 hours!\n\n\
             In the meantime, follow us for inspiration: @{handle} {instagram_url}\n\n\
             Questions? Reply to this email or call us at {phone}\n",
            name = request.full_name,
            brand = self.profile.brand_name,
            handle = self.profile.instagram_handle,
            instagram_url = self.profile.instagram_url,
            phone = self.profile.phone_display,
        );

        OutgoingEmail {
            from: self.sender.clone(),
            to: request.email.clone(),
            subject: format!("Thank you for your interest in {}!", self.profile.brand_name),
            html: wrap(&body),
            text,
        }
    }
}

fn wrap(inner: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9f9f9;">
<div style="background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1);">
{}
</div>
</div>"#,
        inner
    )
}

fn heading(title: &str) -> String {
    format!(
        r#"<div style="text-align: center; margin-bottom: 30px;">
  <h1 style="color: {ACCENT}; font-size: 28px; margin: 0; font-weight: 300;">{title}</h1>
  <div style="width: 60px; height: 2px; background-color: {ACCENT}; margin: 15px auto;"></div>
</div>"#
    )
}

fn paragraph(inner: &str) -> String {
    format!(r#"<p style="margin: 8px 0; color: #555; font-size: 16px;">{}</p>"#, inner)
}

fn callout(text: &str, margin: &str) -> String {
    format!(
        r#"<div style="background-color: {ACCENT}; color: white; padding: 20px; border-radius: 8px; text-align: center; margin: {margin};">
  <p style="margin: 0; font-size: 16px; font-weight: 500;">{text}</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> EmailComposer {
        EmailComposer::new(
            BusinessProfile::default(),
            "Sol Imagery <studio@example.com>",
            "studio@example.com",
        )
    }

    fn request() -> ConsultationRequest {
        ConsultationRequest {
            full_name: "Evelyn Reyes".to_string(),
            email: "evelyn@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            wedding_date: Some("June 2026".to_string()),
            dream_wedding: Some("Garden ceremony at golden hour".to_string()),
        }
    }

    #[test]
    fn test_business_notification_addressing() {
        let email = composer().business_notification(&request());
        assert_eq!(email.to, "studio@example.com");
        assert_eq!(email.from, "Sol Imagery <studio@example.com>");
        assert_eq!(email.subject, "New Wedding Consultation Request from Evelyn Reyes");
        assert!(email.html.contains("mailto:evelyn@example.com"));
        assert!(email.html.contains("tel:(555) 123-4567"));
        assert!(email.html.contains("Wedding Date:</strong> June 2026"));
        assert!(email.html.contains("Wedding Vision"));
        assert!(email.text.contains("Wedding Date: June 2026"));
    }

    #[test]
    fn test_business_notification_omits_absent_optionals() {
        let req = ConsultationRequest {
            wedding_date: None,
            dream_wedding: None,
            ..request()
        };
        let email = composer().business_notification(&req);
        assert!(!email.html.contains("Wedding Date"));
        assert!(!email.html.contains("Wedding Vision"));
        assert!(!email.text.contains("Wedding Date"));
        assert!(!email.text.contains("Wedding Vision"));
    }

    #[test]
    fn test_client_acknowledgment() {
        let email = composer().client_acknowledgment(&request());
        assert_eq!(email.to, "evelyn@example.com");
        assert_eq!(email.subject, "Thank you for your interest in Sol Imagery!");
        assert!(email.html.contains("Thank You, Evelyn Reyes!"));
        assert!(email.html.contains("Follow @solimageryla"));
        assert!(email.html.contains("tel:3239497568"));
        for step in NEXT_STEPS {
            assert!(email.text.contains(step));
        }
    }

    #[test]
    fn test_submitter_markup_is_escaped() {
        let req = ConsultationRequest {
            full_name: "<script>alert(1)</script>".to_string(),
            dream_wedding: Some("\"barn\" & <b>lights</b>".to_string()),
            ..request()
        };
        let notification = composer().business_notification(&req);
        let ack = composer().client_acknowledgment(&req);

        assert!(!notification.html.contains("<script>"));
        assert!(notification.html.contains("&lt;script&gt;"));
        assert!(notification.html.contains("&quot;barn&quot; &amp; &lt;b&gt;lights&lt;/b&gt;"));
        assert!(!ack.html.contains("<script>"));
        // plain text keeps the original characters
        assert!(notification.text.contains("<script>alert(1)</script>"));
    }
}
