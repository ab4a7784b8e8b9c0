use criterion::{Criterion, criterion_group, criterion_main};
use arspell::{MemoryWordStore, SpellChecker, Stats};

fn bench_check_text(c: &mut Criterion) {
    let words = [
        "كتاب", "كتب", "كاتب", "مكتبة", "قلم", "مدرسة", "طالب", "معلم", "درس", "بيت",
    ];
    let text_content = "ذهب الطالب الى المدرسة وقرا كتب ودرس مع المعلم في البيت";

    let spell_checker = SpellChecker::new(
        Box::new(MemoryWordStore::with_entries(words)),
        Box::new(MemoryWordStore::new()),
        // keep history from growing across iterations
        Box::new(MemoryWordStore::new().read_only()),
    )
    .with_limit(3);

    c.bench_function("check_sentence", |b| {
        b.iter(|| {
            let mut stats = Stats::new();
            let _ = spell_checker.check(text_content, &mut stats);
        })
    });
}

criterion_group!(benches, bench_check_text);
criterion_main!(benches);
