use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tweetprep::TweetCleaner;

fn get_test_tweets() -> Vec<String> {
    vec![
        "@switchfoot http://twitpic.com/2y1zl - Awww, that's a bummer.  You shoulda got David Carr of Third Day to do it. ;D",
        "is upset that he can't update his Facebook by texting it... and might cry as a result  School today also. Blah!",
        "@Kenichan I dived many times for the ball. Managed to save 50%  The rest go out of bounds",
        "my whole body feels itchy and like its on fire ",
        "@nationwideclass no, it's not behaving at all. i'm mad. why am i here? because I can't see you all over there. ",
        "Hmmm... http://www.djhero.com/ is down",
        "&quot;I Don't Wanna Grow Up&quot; &amp; other songs &lt;3 www.example.org/playlist",
    ]
    .iter()
    .map(|tweet| tweet.to_string())
    .collect::<Vec<_>>()
}

fn bench_clean(c: &mut Criterion) {
    let tweets = black_box(get_test_tweets());
    let mut cleaner = TweetCleaner::new();

    c.bench_function("clean-tweets", |b| {
        b.iter(|| {
            tweets.iter().for_each(|tweet| {
                black_box(cleaner.clean(tweet));
            })
        })
    });

    c.bench_function("build-cleaner", |b| b.iter(|| black_box(TweetCleaner::new())));
}

criterion_group!(benches, bench_clean);
criterion_main!(benches);
