// Criterion benchmarks for Sol Imagery

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sol_imagery::core::EmailComposer;
use sol_imagery::models::{BusinessProfile, ConsultationRequest};
use sol_imagery::services::mailer::build_message;
use sol_imagery::site::{render_page, SiteContent};

fn create_request() -> ConsultationRequest {
    ConsultationRequest {
        full_name: "Evelyn & Angel".to_string(),
        email: "evelyn@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        wedding_date: Some("June 2026".to_string()),
        dream_wedding: Some("An <intimate> garden ceremony followed by a rooftop reception".repeat(8)),
    }
}

fn bench_render_page(c: &mut Criterion) {
    let content = SiteContent::default();
    let profile = BusinessProfile::default();

    c.bench_function("render_page", |b| {
        b.iter(|| render_page(black_box(&content), black_box(&profile), black_box("/images")))
    });
}

fn bench_compose_emails(c: &mut Criterion) {
    let composer = EmailComposer::new(BusinessProfile::default(), "studio@example.com", "studio@example.com");
    let request = create_request();

    let mut group = c.benchmark_group("compose");
    group.bench_function("business_notification", |b| {
        b.iter(|| composer.business_notification(black_box(&request)))
    });
    group.bench_function("client_acknowledgment", |b| {
        b.iter(|| composer.client_acknowledgment(black_box(&request)))
    });
    group.bench_function("build_message", |b| {
        let email = composer.business_notification(&request);
        b.iter(|| build_message(black_box(&email)))
    });
    group.finish();
}

criterion_group!(benches, bench_render_page, bench_compose_emails);
criterion_main!(benches);
