use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use s3sig_core::{Context, SignRequest};
use s3sig_s3_v4::Credential;
use s3sig_s3_v4::RequestSigner;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("s3_v4");

    let cred = Credential::new("access_key_id", "secret_access_key");
    let s = RequestSigner::new("test");
    let ctx = Context::new();

    group.bench_function("empty_body", |b| {
        b.iter(|| {
            let (mut parts, _) = http::Request::get("http://127.0.0.1:9000/hello/world.png")
                .body(())
                .expect("request must be valid")
                .into_parts();

            s.sign_request(&ctx, &mut parts, b"", &cred)
                .expect("must success")
        })
    });

    group.bench_function("1mb_body", |b| {
        let body = vec![0u8; 1024 * 1024];

        b.iter(|| {
            let (mut parts, _) = http::Request::get("http://127.0.0.1:9000/hello/world.png")
                .body(())
                .expect("request must be valid")
                .into_parts();

            s.sign_request(&ctx, &mut parts, &body, &cred)
                .expect("must success")
        })
    });

    group.finish();
}
