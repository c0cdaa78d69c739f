//! Library API integration tests over saved jisho.org pages
use jisho_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_kanji_page() {
    let html = read_fixture("kanji_car.html");
    let record = parse_kanji_page_html(&html, "車");

    assert!(record.found);
    assert_eq!(record.query, "車");
    assert_eq!(record.uri, "https://jisho.org/search/%E8%BB%8A%23kanji");

    let details = record.details.expect("details for a found kanji");
    assert_eq!(details.stroke_count, Some(7));
    assert_eq!(details.taught_in.as_deref(), Some("grade 1"));
    assert_eq!(details.grade_number, Some(1));
    assert_eq!(details.jlpt_level.as_deref(), Some("N5"));
    assert_eq!(details.newspaper_frequency_rank, Some(333));
    assert_eq!(details.meaning.as_deref(), Some("car"));
    assert_eq!(details.kunyomi, vec!["くるま"]);
    assert_eq!(details.onyomi, vec!["シャ"]);
    assert_eq!(details.parts, vec!["車"]);
}

#[test]
fn test_kanji_page_radical_and_uris() {
    let html = read_fixture("kanji_car.html");
    let details = parse_kanji_page_html(&html, "車").details.unwrap();

    assert_eq!(details.radical, Some(Radical { symbol: "車".into(), forms: None, meaning: "cart, car".into() }));
    assert_eq!(
        details.stroke_order_svg_uri.as_deref(),
        Some("https://d1w6u4xc3l95km.cloudfront.net/kanji-2015-03/08eca.svg")
    );
    assert_eq!(
        details.stroke_order_diagram_uri.as_deref(),
        Some("https://classic.jisho.org/static/images/stroke_diagrams/36554_frames.png")
    );
    assert_eq!(
        details.stroke_order_gif_uri.as_deref(),
        Some("https://raw.githubusercontent.com/mistval/kanji_images/master/gifs/8eca.gif")
    );
}

#[test]
fn test_kanji_page_compounds() {
    let html = read_fixture("kanji_car.html");
    let details = parse_kanji_page_html(&html, "車").details.unwrap();

    assert_eq!(details.onyomi_examples.len(), 3);
    assert_eq!(
        details.onyomi_examples[1],
        YomiExample {
            example: "車庫".into(),
            reading: "シャコ".into(),
            meaning: "garage, carport, depot (trains, buses, etc.)".into()
        }
    );

    assert_eq!(details.kunyomi_examples.len(), 2);
    assert_eq!(details.kunyomi_examples[1].example, "手車");
    assert_eq!(details.kunyomi_examples[1].reading, "てぐるま");
    assert_eq!(
        details.kunyomi_examples[1].meaning,
        r#"handcart, "chair" formed by two people's crossed arms"#
    );
}

#[test]
fn test_kanji_not_found() {
    let html = read_fixture("kanji_not_found.html");
    let record = parse_kanji_page_html(&html, "wegmwrlgkrgmg");

    assert!(!record.found);
    assert!(record.details.is_none());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn test_kanji_page_json_shape() {
    let html = read_fixture("kanji_car.html");
    let record = parse_kanji_page_html(&html, "車");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["found"], true);
    assert_eq!(json["strokeCount"], 7);
    assert_eq!(json["newspaperFrequencyRank"], 333);
    assert_eq!(json["onyomiExamples"][0]["reading"], "シャ");
    assert_eq!(json["radical"]["meaning"], "cart, car");
    assert!(json["radical"].get("forms").is_none());
}

#[test]
fn test_example_page() {
    let html = read_fixture("examples_car.html");
    let result = parse_example_page_html(&html, "車").unwrap();

    assert!(result.found);
    assert_eq!(result.uri, "https://jisho.org/search/%E8%BB%8A%23sentences");
    assert_eq!(result.results.len(), 3);

    let first = &result.results[0];
    assert_eq!(first.english, "He is washing his car.");
    assert_eq!(first.kanji, "彼は車を洗っている。");
    assert_eq!(first.kana, "かれはくるまをあらっている。");

    let second = &result.results[1];
    assert_eq!(second.kanji, "電車より車のほうが速いです。");
    assert_eq!(second.kana, "でんしゃよりくるまのほうがはやいです。");

    let third = &result.results[2];
    assert_eq!(third.kanji, "自動車で行きましょうか？");
    assert_eq!(third.kana, "じどうしゃでいきましょうか？");
}

#[test]
fn test_example_pieces_join_to_kanji() {
    let html = read_fixture("examples_car.html");
    let result = parse_example_page_html(&html, "車").unwrap();

    for sentence in &result.results {
        let joined: String = sentence.pieces.iter().map(|piece| piece.unlifted.as_str()).collect();
        assert_eq!(joined, sentence.kanji);
    }

    let pieces = &result.results[0].pieces;
    assert_eq!(pieces[4], SentencePiece { lifted: "あら".into(), unlifted: "洗って".into() });
    assert_eq!(pieces.last().unwrap(), &SentencePiece { lifted: String::new(), unlifted: "。".into() });
}

#[test]
fn test_example_page_without_results() {
    let html = read_fixture("examples_empty.html");
    let result = parse_example_page_html(&html, "wegmwrlgkrgmg").unwrap();

    assert!(!result.found);
    assert!(result.results.is_empty());
    assert_eq!(result.phrase, "wegmwrlgkrgmg");
}

#[test]
fn test_word_page_tags_and_audio() {
    let html = read_fixture("word_car.html");
    let result = parse_phrase_scrape_page_html(&html, "車").unwrap();

    assert!(result.found);
    assert_eq!(result.uri.as_deref(), Some("https://jisho.org/word/%E8%BB%8A"));

    let details = result.details.unwrap();
    assert_eq!(details.tags, vec!["Common word", "JLPT N5", "Wanikani level 2"]);
    assert_eq!(details.audio.len(), 2);
    assert_eq!(details.audio[0].mimetype, "audio/mpeg");
    assert!(details.audio[0].uri.starts_with("https://d1vjc5dkcd3yh2.cloudfront.net/audio/"));
    assert_eq!(details.audio[1].mimetype, "audio/ogg");
}

#[test]
fn test_word_page_meanings() {
    let html = read_fixture("word_car.html");
    let details = parse_phrase_scrape_page_html(&html, "車").unwrap().details.unwrap();

    assert_eq!(details.meanings.len(), 3);

    let car = &details.meanings[0];
    assert_eq!(car.definition, "car; automobile; vehicle");
    assert_eq!(car.tags, vec!["noun"]);
    assert_eq!(car.sentences.len(), 1);
    assert_eq!(car.sentences[0].english, "The car stopped.");
    assert_eq!(car.sentences[0].japanese, "車が止まった。");
    assert_eq!(car.sentences[0].pieces[0], SentencePiece { lifted: "くるま".into(), unlifted: "車".into() });

    let wheel = &details.meanings[1];
    assert_eq!(wheel.definition, "wheel");
    assert_eq!(wheel.tags, vec!["noun"]);
    assert_eq!(wheel.supplemental, vec!["Archaism"]);
    assert_eq!(wheel.see_also_terms, vec!["車輪"]);
    assert!(wheel.sentences.is_empty());

    let wikipedia = &details.meanings[2];
    assert_eq!(wikipedia.tags, vec!["wikipedia definition"]);
    assert_eq!(wikipedia.definition_abstract, "A car is a wheeled motor vehicle used for transportation.");
}

#[test]
fn test_word_page_other_forms_and_notes() {
    let html = read_fixture("word_car.html");
    let details = parse_phrase_scrape_page_html(&html, "車").unwrap().details.unwrap();

    assert_eq!(
        details.other_forms,
        vec![
            OtherForm { kanji: "俥".into(), kana: "くるま".into() },
            OtherForm { kanji: "クルマ".into(), kana: String::new() },
        ]
    );
    assert_eq!(details.notes, vec!["俥: Rarely-used kanji form."]);
}

#[test]
fn test_word_page_json_is_flat() {
    let html = read_fixture("word_car.html");
    let result = parse_phrase_scrape_page_html(&html, "車").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["found"], true);
    assert!(json.get("details").is_none());
    assert_eq!(json["otherForms"][0]["kanji"], "俥");
    assert_eq!(json["meanings"][1]["seeAlsoTerms"][0], "車輪");
}

#[test]
fn test_extraction_is_repeatable() {
    let kanji_html = read_fixture("kanji_car.html");
    let example_html = read_fixture("examples_car.html");
    let word_html = read_fixture("word_car.html");

    assert_eq!(parse_kanji_page_html(&kanji_html, "車"), parse_kanji_page_html(&kanji_html, "車"));
    assert_eq!(
        parse_example_page_html(&example_html, "車").unwrap(),
        parse_example_page_html(&example_html, "車").unwrap()
    );
    assert_eq!(
        parse_phrase_scrape_page_html(&word_html, "車").unwrap(),
        parse_phrase_scrape_page_html(&word_html, "車").unwrap()
    );
}

#[test]
fn test_custom_endpoints_change_reported_uris() {
    let endpoints =
        Endpoints::new("http://mirror.test/api", "http://mirror.test/search/", "http://mirror.test/word/").unwrap();

    let kanji = parse_kanji_page(&read_fixture("kanji_car.html"), "車", &endpoints);
    let examples = parse_example_page(&read_fixture("examples_car.html"), "車", &endpoints).unwrap();
    let word = parse_phrase_scrape_page(&read_fixture("word_car.html"), "車", &endpoints).unwrap();

    assert_eq!(kanji.uri, "http://mirror.test/search/%E8%BB%8A%23kanji");
    assert_eq!(examples.uri, "http://mirror.test/search/%E8%BB%8A%23sentences");
    assert_eq!(word.uri.as_deref(), Some("http://mirror.test/word/%E8%BB%8A"));
}

#[test]
fn test_search_response_from_file() {
    let json = fetch_file(&get_fixture_path("search_car.json")).unwrap();
    let result: RawApiResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result.meta.status, 200);
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[0].slug, "車");
    assert_eq!(result.data[0].senses[1].see_also, vec!["車輪"]);
}

#[test]
fn test_fetch_missing_file() {
    let result = fetch_file(&get_fixture_path("no_such_page.html"));
    assert!(matches!(result, Err(JishoError::FileNotFound(_))));
}

#[test]
fn test_text_output() {
    let record = parse_kanji_page_html(&read_fixture("kanji_car.html"), "車");
    let text = convert_to_text(&record, &TextConfig::default());

    assert!(text.starts_with("車\n"));
    assert!(text.contains("Kun reading compounds:"));
    assert!(text.contains("車庫 【シャコ】"));
    assert!(text.contains("https://jisho.org/search/%E8%BB%8A%23kanji"));
}

#[test]
fn test_json_output() {
    let result = parse_phrase_scrape_page_html(&read_fixture("word_car.html"), "車").unwrap();
    let json = convert_to_json(&result, &JsonConfig { pretty: true }).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["query"], "車");
    assert!(json.contains("\n  \"found\": true"));
}
