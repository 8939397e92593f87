// benches/pipeline_benchmarks.rs
use criterion::{criterion_group, criterion_main, Criterion};
use std::{hint::black_box, time::Duration};
use tokio::runtime::Runtime;

use nhs_job_alerts::{
    domain::{job_id_for_link, Site},
    repository::{sqlite::PostedJobRepository, PostedJobStore},
    service::TitleFilter,
    test_utils::set_up_in_memory_db,
};

fn bench_title_filter(c: &mut Criterion) {
    let filter = TitleFilter::default();

    c.bench_function("title_filter_reject", |b| {
        b.iter(|| filter.allowed(black_box("Consultant in Interventional Cardiology")))
    });
}

fn bench_job_id(c: &mut Criterion) {
    c.bench_function("job_id_for_link", |b| {
        b.iter(|| job_id_for_link(black_box("https://www.jobs.nhs.uk/candidate/jobadvert/C9333-26-1234")))
    });
}

fn bench_is_new(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = rt.block_on(async {
        let repo = PostedJobRepository::new(set_up_in_memory_db().await);
        for i in 0..10_000 {
            repo.mark_posted(Site::NhsJobs, &job_id_for_link(&format!("https://www.nhsjobs.com/job/{}", i)))
                .await
                .expect("Failed");
        }
        repo
    });
    let probe = job_id_for_link("https://www.nhsjobs.com/job/5000");

    c.bench_function("is_new_hit_10k", |b| {
        b.to_async(&rt).iter(|| async {
            let result = repo
                .is_new(Site::NhsJobs, black_box(&probe))
                .await
                .expect("Failed");

            black_box(result)
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5));
    targets = bench_title_filter, bench_job_id, bench_is_new
}

criterion_main!(benches);
