use criterion::{Criterion, black_box, criterion_group, criterion_main};
use leasener_core::{Model, Task, Tokenizer, UpdateOptions};
use oorandom::Rand32;

const LEASE: &str = "THIS COMMERCIAL LEASE AGREEMENT is made and entered into effective starting \
                     February 1, 2012 until January 31, 2013, by and between FRONTAGE ROAD \
                     COMMERCIAL PROPERTIES, LLC, with mailing address of 607 Triple Tree Road";

fn trained_model() -> Model {
    let task = Task::LeaseDates;
    let mut model = Model::blank("en");
    let ner = model.add_ner();
    for label in task.labels().iter() {
        ner.add_label(label);
    }
    model.add_ruler().unwrap();

    let golds: Vec<_> = task
        .examples()
        .iter()
        .map(|e| model.make_gold(e).unwrap())
        .collect();
    let mut rng = Rand32::new(0);
    for _ in 0..3 {
        for gold in &golds {
            model
                .update(&[gold], UpdateOptions::default(), &mut rng)
                .unwrap();
        }
    }
    model
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    c.bench_function("tokenize_lease_paragraph", |b| {
        b.iter(|| tokenizer.tokenize(black_box(LEASE)));
    });
}

fn bench_pipe(c: &mut Criterion) {
    let model = trained_model();
    c.bench_function("pipe_lease_paragraph", |b| {
        b.iter(|| model.pipe(black_box(LEASE)).unwrap());
    });
}

criterion_group!(benches, bench_tokenize, bench_pipe);
criterion_main!(benches);
