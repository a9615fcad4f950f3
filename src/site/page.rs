use chrono::Datelike;

use crate::core::html_escape;
use crate::core::page_state::{FormStatus, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SCROLL_THRESHOLD_PX};
use crate::models::BusinessProfile;
use crate::site::content::SiteContent;
use crate::site::sections::{
    render_about, render_contact, render_footer, render_hero, render_nav, render_offerings,
    render_showcase, render_testimonials, render_why_choose,
};

const STYLES: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:Arial,sans-serif;background:#fafafa;color:#171717;overflow-x:hidden}
.site-nav{position:fixed;top:0;width:100%;z-index:50;transition:background .2s}
.site-nav.scrolled{background:rgba(255,255,255,.95);box-shadow:0 1px 2px rgba(0,0,0,.05)}
.mobile-overlay{position:fixed;inset:0;background:#fff;z-index:60}
.scroll-animate{opacity:0;transform:translateY(40px)}
.scroll-animate.revealed{opacity:1;transform:none;transition:opacity 1.2s,transform 1.2s}
.rule{width:60px;height:2px;background:#ceb07e;margin:15px auto}
[hidden]{display:none!important}
"#;

/// Browser-side state: scroll flag, menu overlay, one-way reveals and the
/// consultation form status machine.
fn render_script() -> String {
    format!(
        r#"<script>
(function () {{
  var nav = document.querySelector('[data-nav]');
  var onScroll = function () {{
    nav.classList.toggle('scrolled', window.scrollY > {scroll});
  }};
  window.addEventListener('scroll', onScroll, {{ passive: true }});
  onScroll();

  var menu = document.querySelector('[data-menu]');
  var toggle = document.querySelector('[data-menu-toggle]');
  var setMenu = function (open) {{
    menu.hidden = !open;
    toggle.setAttribute('aria-expanded', String(open));
  }};
  toggle.addEventListener('click', function () {{ setMenu(menu.hidden); }});
  document.querySelectorAll('[data-close-menu]').forEach(function (link) {{
    link.addEventListener('click', function () {{ setMenu(false); }});
  }});

  if ('IntersectionObserver' in window) {{
    var observer = new IntersectionObserver(function (entries) {{
      entries.forEach(function (entry) {{
        if (entry.isIntersecting) {{
          entry.target.classList.add('revealed');
          observer.unobserve(entry.target);
        }}
      }});
    }}, {{ threshold: {threshold}, rootMargin: '{margin}' }});
    document.querySelectorAll('.scroll-animate').forEach(function (el) {{ observer.observe(el); }});
  }} else {{
    document.querySelectorAll('.scroll-animate').forEach(function (el) {{ el.classList.add('revealed'); }});
  }}

  var form = document.getElementById('consultation-form');
  var button = form.querySelector('[data-submit]');
  var setStatus = function (status) {{
    form.dataset.status = status;
    button.disabled = status === '{submitting}';
    button.textContent = status === '{submitting}' ? button.dataset.busyLabel : button.dataset.label;
    form.querySelectorAll('[data-form-status]').forEach(function (panel) {{
      panel.hidden = panel.dataset.formStatus !== (status === '{submitting}' ? '{idle}' : status);
    }});
  }};
  form.addEventListener('submit', function (event) {{
    event.preventDefault();
    if (form.dataset.status === '{submitting}') {{ return; }}
    setStatus('{submitting}');
    var body = {{}};
    new FormData(form).forEach(function (value, key) {{ body[key] = value; }});
    fetch(form.action, {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify(body)
    }}).then(function (response) {{
      if (response.status === 200) {{
        form.reset();
        setStatus('{success}');
      }} else {{
        setStatus('{error}');
      }}
    }}).catch(function () {{
      setStatus('{error}');
    }});
  }});
}})();
</script>"#,
        scroll = SCROLL_THRESHOLD_PX,
        threshold = REVEAL_THRESHOLD,
        margin = REVEAL_ROOT_MARGIN,
        idle = FormStatus::Idle.as_str(),
        submitting = FormStatus::Submitting.as_str(),
        success = FormStatus::Success.as_str(),
        error = FormStatus::Error.as_str(),
    )
}

/// Render the complete landing page document
///
/// # Arguments
/// * `content` - Section copy and imagery
/// * `profile` - Business identity for navigation, contact panel and footer
/// * `image_base` - URL prefix for every image path
pub fn render_page(content: &SiteContent, profile: &BusinessProfile, image_base: &str) -> String {
    let title = format!(
        "{} - Luxury Wedding Photography in Los Angeles",
        profile.brand_name
    );

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="#b8996b">
<title>{title}</title>
<link rel="canonical" href="{site_url}/">
<style>{styles}</style>
</head>
<body>
{nav}
<main>
{hero}
{why_choose}
{showcase}
{offerings}
{about}
{testimonials}
{contact}
</main>
{footer}
{script}
</body>
</html>
"##,
        title = html_escape(&title),
        site_url = html_escape(profile.site_url.trim_end_matches('/')),
        styles = STYLES,
        nav = render_nav(profile, image_base),
        hero = render_hero(&content.hero, image_base),
        why_choose = render_why_choose(&content.why_choose, image_base),
        showcase = render_showcase(&content.showcase, image_base),
        offerings = render_offerings(&content.offerings),
        about = render_about(&content.about, image_base),
        testimonials = render_testimonials(&content.testimonials),
        contact = render_contact(&content.contact, profile),
        footer = render_footer(profile, &content.offerings, chrono::Utc::now().year()),
        script = render_script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uses_state_constants() {
        let script = render_script();
        assert!(script.contains("window.scrollY > 50"));
        assert!(script.contains("threshold: 0.1"));
        assert!(script.contains("rootMargin: '0px 0px -50px 0px'"));
        assert!(script.contains("status === 'submitting'"));
    }

    #[test]
    fn test_script_blocks_duplicate_submission() {
        let script = render_script();
        assert!(script.contains("if (form.dataset.status === 'submitting') { return; }"));
        assert!(script.contains("button.disabled = status === 'submitting';"));

        let guard = script.find("return; }").unwrap();
        let begin = script.find("setStatus('submitting');").unwrap();
        let request = script.find("fetch(form.action").unwrap();
        assert!(guard < begin && begin < request);
    }

    #[test]
    fn test_script_maps_response_to_status() {
        let script = render_script();
        assert!(script.contains("if (response.status === 200) {\n        form.reset();\n        setStatus('success');"));
        assert!(script.contains("} else {\n        setStatus('error');"));
        assert!(script.contains(".catch(function () {\n      setStatus('error');"));
    }

    #[test]
    fn test_script_reveal_is_one_way_and_menu_closes_on_link() {
        let script = render_script();
        assert!(script.contains("entry.target.classList.add('revealed');\n          observer.unobserve(entry.target);"));
        assert!(!script.contains("classList.remove('revealed')"));
        assert!(script.contains("link.addEventListener('click', function () { setMenu(false); });"));
        assert!(script.contains("toggle.addEventListener('click', function () { setMenu(menu.hidden); });"));
    }

    #[test]
    fn test_status_panels_match_script_names() {
        let html = render_page(&SiteContent::default(), &BusinessProfile::default(), "/images");
        for status in FormStatus::PANELS {
            assert!(html.contains(&format!(r#"data-form-status="{}""#, status.as_str())));
        }
        assert!(!html.contains(r#"data-form-status="submitting""#));
    }

    #[test]
    fn test_page_contains_every_section() {
        let html = render_page(&SiteContent::default(), &BusinessProfile::default(), "/images");
        for anchor in ["home", "why-choose", "showcase", "offerings", "about", "testimonials", "contact"] {
            assert!(html.contains(&format!(r#"id="{}""#, anchor)), "missing section {}", anchor);
        }
        assert!(html.contains("<title>Sol Imagery - Luxury Wedding Photography in Los Angeles</title>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
