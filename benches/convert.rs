use criterion::{black_box, criterion_group, criterion_main, Criterion};
use piwik_gtm::{
    convert::Converter,
    file_parsers::{piwik::PiwikParser, FileParser},
};
use serde_json::{json, Map, Value};

/// An export with `n` triggers, each with a couple of conditions, and `n` tags
/// firing on two triggers apiece
fn synthetic_export(n: usize) -> Vec<u8> {
    let triggers = (0..n)
        .map(|i| {
            let trigger = json!({
                "attributes": {"name": format!("Trigger {i}"), "type": "click"},
                "conditions": [
                    {"variableName": "Page URL", "operator": "contains", "value": format!("/p/{i}")},
                    {"variableName": "Click Text", "operator": "eq", "value": "Buy"},
                ],
            });
            (format!("trg-{i}"), trigger)
        })
        .collect::<Map<String, Value>>();

    let tags = (0..n)
        .map(|i| {
            let tag = json!({
                "attributes": {"name": format!("Tag {i}"), "code": "<script>track()</script>"},
                "triggers": [format!("trg-{i}"), format!("trg-{}", (i + 1) % n)],
            });
            (format!("tag-{i}"), tag)
        })
        .collect::<Map<String, Value>>();

    json!({
        "containerVersion": {"accountId": 1234, "containerId": 5678},
        "triggers": triggers,
        "tags": tags,
    })
    .to_string()
    .into_bytes()
}

fn convert_benchmark(c: &mut Criterion) {
    let converter = Converter::default();
    let bytes = synthetic_export(500);

    c.bench_function("parse_500", |b| {
        b.iter(|| PiwikParser.parse(black_box(&bytes)).expect("Failed to parse"))
    });

    let source = PiwikParser.parse(&bytes).expect("Failed to parse");
    c.bench_function("convert_500", |b| b.iter(|| converter.convert(black_box(&source))));

    c.bench_function("convert_bytes_500", |b| {
        b.iter(|| {
            converter
                .convert_bytes(black_box(&bytes))
                .expect("Failed to convert")
        })
    });
}

criterion_group!(benches, convert_benchmark);
criterion_main!(benches);
