//! Benchmarks for transition evaluation and forecasting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use funnelflow::prelude::*;

fn transition_benchmark(c: &mut Criterion) {
    let config = PipelineConfig::official();
    let attendee = AttendeeRecord::intake(AudienceType::FriendsFamily);
    let request = TransitionRequest::new(attendee.id, "form_rsvp");

    c.bench_function("apply_transition", |b| {
        b.iter(|| {
            apply_transition(black_box(&attendee), black_box(&request), black_box(&config))
        })
    });
}

fn forecast_benchmark(c: &mut Criterion) {
    let inputs = ForecastInputs::new(
        FundraisingGoals {
            total_fundraise: 10_000.0,
            costs: 2_000.0,
        },
        50.0,
    )
    .with_segment(AudienceType::OrgMembers, SegmentPlan::new(0.25, 50))
    .with_segment(AudienceType::FriendsFamily, SegmentPlan::new(0.15, 100))
    .with_segment(AudienceType::CommunityPartners, SegmentPlan::new(0.1, 200));

    c.bench_function("forecast", |b| {
        b.iter(|| forecast(black_box(&inputs)))
    });
}

criterion_group!(benches, transition_benchmark, forecast_benchmark);
criterion_main!(benches);
