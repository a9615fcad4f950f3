use serde::{Deserialize, Serialize};

use crate::models::requests::ContactRequest;

/// A consultation inquiry, alive only for the duration of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub wedding_date: Option<String>,
    pub dream_wedding: Option<String>,
}

impl From<ContactRequest> for ConsultationRequest {
    fn from(req: ContactRequest) -> Self {
        Self {
            full_name: req.full_name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: req.phone.trim().to_string(),
            wedding_date: non_blank(req.wedding_date),
            dream_wedding: non_blank(req.dream_wedding),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Transport-neutral email message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Mailbox, optionally with a display name: `Name <address>`
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Business identity shared by the landing page and the notification emails
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub brand_name: String,
    pub public_email: String,
    /// Phone number as shown to people
    pub phone_display: String,
    /// Phone number for `tel:` links
    pub phone_dial: String,
    pub location: String,
    pub instagram_handle: String,
    pub instagram_url: String,
    pub site_url: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            brand_name: "Sol Imagery".to_string(),
            public_email: "Info@solimagery.com".to_string(),
            phone_display: "323.949.7568".to_string(),
            phone_dial: "3239497568".to_string(),
            location: "Based in Los Angeles, California.".to_string(),
            instagram_handle: "solimageryla".to_string(),
            instagram_url: "https://www.instagram.com/solimageryla/".to_string(),
            site_url: "https://solimagery.com".to_string(),
        }
    }
}
