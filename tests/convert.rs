//! End-to-end tests for `fb2txt::convert`.

use fb2txt::{convert, FormattingMode};

const SAMPLE: &str = include_str!("fixtures/sample.fb2");

fn separator() -> String {
    "=".repeat(40)
}

#[test]
fn test_sample_plain() {
    let out = convert(SAMPLE, FormattingMode::Plain).unwrap();
    let expected = format!(
        "Title: Пример книги\nAuthor: Иван Иванов\n{}\n\n\
         — Времена меняются, — вздохнул седой мужчина, сидевший в кресле напротив молодого человека.\n\n\
         Парень, находившийся перед ним, был достаточно свеж, но, несмотря на молодость лица, имел уже ярко выраженную седину в волосах.\n\n\
         * * *\n\n\
         А также на парте появилась ещё одна небольшая надпись, которую он не сразу заметил.\n\n\
         «Ты молодец!»\n\n\
         \n\
         Конец первой книги.\n\n",
        separator()
    );
    assert_eq!(out, expected);
}

#[test]
fn test_sample_smart() {
    let out = convert(SAMPLE, FormattingMode::Smart).unwrap();
    assert!(out.starts_with("Title: Пример книги\nAuthor: Иван Иванов\n"));
    assert!(out.contains("\n### * * *\n\n"));
    assert!(out.contains("\n*«Ты молодец!»*\n\n\nКонец первой книги.\n\n"));
    assert!(out.ends_with("Конец первой книги.\n\n"));
}

#[test]
fn test_emphasis_scenario() {
    let xml = "<body><p>Hello <emphasis>world</emphasis>!</p></body>";
    assert_eq!(convert(xml, FormattingMode::Smart).unwrap(), "Hello *world*!\n\n");
    assert_eq!(convert(xml, FormattingMode::Plain).unwrap(), "Hello world!\n\n");
}

#[test]
fn test_body_without_description_has_no_header() {
    let xml = "<FictionBook><body><p>Only text</p></body></FictionBook>";
    for mode in [FormattingMode::Plain, FormattingMode::Smart] {
        let out = convert(xml, mode).unwrap();
        assert!(!out.contains("Title:"));
        assert!(!out.contains("Author:"));
        assert!(!out.contains(&separator()));
        assert_eq!(out, "Only text\n\n");
    }
}

#[test]
fn test_last_name_only_author() {
    let xml = "<FictionBook><description><title-info><author>\
               <last-name>Homer</last-name></author></title-info></description>\
               <body><p>Sing, goddess</p></body></FictionBook>";
    let out = convert(xml, FormattingMode::Plain).unwrap();
    assert!(out.starts_with("Author: Homer\n"));
}

#[test]
fn test_missing_body_returns_metadata_only() {
    let xml = "<FictionBook><description><book-title>Lost</book-title></description></FictionBook>";
    let out = convert(xml, FormattingMode::Smart).unwrap();
    assert_eq!(out, format!("Title: Lost\n{}\n\n", separator()));

    let out = convert("<FictionBook/>", FormattingMode::Smart).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_only_first_body_is_walked() {
    let xml = r#"<FictionBook><body><p>Main</p></body><body name="notes"><p>Note</p></body></FictionBook>"#;
    assert_eq!(convert(xml, FormattingMode::Plain).unwrap(), "Main\n\n");
}

#[test]
fn test_conversion_is_idempotent() {
    for mode in [FormattingMode::Plain, FormattingMode::Smart] {
        let first = convert(SAMPLE, mode).unwrap();
        let second = convert(SAMPLE, mode).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_modes_differ_only_in_markers() {
    let xml = "<body><section><subtitle>Chapter <emphasis>I</emphasis></subtitle>\
               <p>The <emphasis>quick</emphasis> fox <strong>jumps</strong>.</p>\
               <empty-line/><p><emphasis>End</emphasis></p></section></body>";
    let words = |text: &str| -> Vec<String> {
        text.replace("###", "")
            .replace('*', "")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    };
    let plain = convert(xml, FormattingMode::Plain).unwrap();
    let smart = convert(xml, FormattingMode::Smart).unwrap();
    assert_eq!(words(&plain), words(&smart));
    assert!(!plain.contains('*'));
    assert!(smart.contains("*quick*"));
}

#[test]
fn test_empty_line_contributes_one_newline() {
    let with = "<body><p>a</p><empty-line/><p>b</p></body>";
    let without = "<body><p>a</p><p>b</p></body>";
    for mode in [FormattingMode::Plain, FormattingMode::Smart] {
        let a = convert(with, mode).unwrap();
        let b = convert(without, mode).unwrap();
        assert_eq!(a.len(), b.len() + 1);
        assert_eq!(a, "a\n\n\nb\n\n");

        assert_eq!(convert("<body><empty-line/></body>", mode).unwrap(), "\n");
        assert_eq!(
            convert("<body><empty-line/><p>a</p></body>", mode).unwrap(),
            "\na\n\n"
        );
        assert_eq!(
            convert("<body><p>a</p><empty-line/></body>", mode).unwrap(),
            "a\n\n\n"
        );
    }
}

#[test]
fn test_whitespace_paragraph_produces_nothing() {
    let xml = "<body><p>a</p><p>  \t\n </p><p>b</p></body>";
    assert_eq!(convert(xml, FormattingMode::Plain).unwrap(), "a\n\nb\n\n");
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    let err = convert("<body><p>Hello</body>", FormattingMode::Plain).unwrap_err();
    assert!(err.to_string().starts_with("malformed document at byte"));

    assert!(convert("<body><p>never closed", FormattingMode::Smart).is_err());
    assert!(convert("not xml at all", FormattingMode::Plain).is_err());
}
