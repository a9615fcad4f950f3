//! Server-rendered landing page.

pub mod content;
pub mod page;
pub mod sections;

pub use content::SiteContent;
pub use page::render_page;
