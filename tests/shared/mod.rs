/// Tweets in the shape of the raw dataset, with markup, mentions, links and
/// contractions.
pub(crate) fn get_test_tweets() -> Vec<String> {
    vec![
        "@switchfoot http://twitpic.com/2y1zl - Awww, that's a bummer.  You shoulda got David Carr of Third Day to do it. ;D",
        "is upset that he can't update his Facebook by texting it... and might cry as a result  School today also. Blah!",
        "@Kenichan I dived many times for the ball. Managed to save 50%  The rest go out of bounds",
        "my whole body feels itchy and like its on fire ",
        "@nationwideclass no, it's not behaving at all. i'm mad. why am i here? because I can't see you all over there. ",
        "Hmmm... http://www.djhero.com/ is down",
        "@LOLTrish hey  long time no see! Yes.. Rains a bit ,only a bit  LOL , I'm fine thanks , how's you ?",
        "&quot;I Don't Wanna Grow Up&quot; &amp; other songs &lt;3 www.example.org/playlist",
        "<a href=\"http://x.co\">link</a> Isn't it WEIRD?!",
        "\u{feff}caf\u{fffd} mornings are the best",
        "1234 5678 !!!",
        "",
        "a b c d e",
        "   spaced      out    tweet   ",
    ]
    .iter()
    .map(|tweet| tweet.to_string())
    .collect::<Vec<_>>()
}

/// The same tweets as headerless raw CSV rows, alternating labels.
pub(crate) fn get_test_csv() -> String {
    get_test_tweets()
        .iter()
        .enumerate()
        .map(|(index, tweet)| {
            let label = if index % 2 == 0 { 0 } else { 4 };
            let text = tweet.replace('"', "\"\"");
            format!("\"{label}\",\"{index}\",\"Mon Apr 06 2009\",\"NO_QUERY\",\"user{index}\",\"{text}\"\n")
        })
        .collect()
}
