// Service exports
pub mod mailer;

pub use mailer::{Mailer, MailError, SmtpMailer};
