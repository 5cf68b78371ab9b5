//! 分段翻译流程集成测试
//!
//! 用测试后端替换真实翻译服务，验证分段、回退、拼接和规范化。

mod common;

use common::{texts, DictionaryProvider, FailingProvider};
use zh_converter::{
    normalize_question_marks, Action, ChineseConverter, Language, ScriptConverter,
    TranslationBackendChain, TranslationProvider, TranslationService,
};

fn service(providers: Vec<Box<dyn TranslationProvider>>) -> TranslationService {
    TranslationService::with_chain(TranslationBackendChain::new(providers))
}

#[tokio::test]
async fn only_chinese_runs_are_translated() {
    let (dict, log) = DictionaryProvider::new("dict", &[("你好", "Hello")]);
    let service = service(vec![Box::new(dict)]);

    let result = service
        .translate_mixed_script("Hello 你好 World", Language::English)
        .await;

    assert_eq!(result, "Hello Hello World");
    assert_eq!(texts(&log), ["你好"]);
    let request = log.lock().unwrap()[0].clone();
    assert_eq!(request.source_lang, Language::ChineseSimplified);
    assert_eq!(request.target_lang, Language::English);
}

#[tokio::test]
async fn doubled_question_marks_from_a_backend_are_collapsed() {
    let (dict, _) = DictionaryProvider::new("dict", &[("你好", "Hi?")]);
    let service = service(vec![Box::new(dict)]);

    let result = service
        .translate_mixed_script("Hello 你好？ World", Language::English)
        .await;

    assert_eq!(result, "Hello Hi？ World");
    assert!(!result.contains("?？"));
}

#[tokio::test]
async fn falls_through_to_the_next_provider() {
    let (down, down_log) = FailingProvider::new("down");
    let (dict, dict_log) = DictionaryProvider::new("dict", &[("世界", "Welt")]);
    let service = service(vec![Box::new(down), Box::new(dict)]);

    let result = service
        .translate_mixed_script("Hallo, 世界!", Language::German)
        .await;

    assert_eq!(result, "Hallo, Welt!");
    assert_eq!(texts(&down_log), ["世界"]);
    assert_eq!(texts(&dict_log), ["世界"]);
}

#[tokio::test]
async fn every_run_is_requested_in_order() {
    let (dict, log) = DictionaryProvider::new(
        "dict",
        &[("第一", "first"), ("第二", "second"), ("第三", "third")],
    );
    let service = service(vec![Box::new(dict)]);

    let result = service
        .translate_mixed_script("1.第一 2.第二 3.第三", Language::English)
        .await;

    assert_eq!(result, "1.first 2.second 3.third");
    assert_eq!(texts(&log), ["第一", "第二", "第三"]);
}

#[tokio::test]
async fn exhausted_providers_leave_input_untranslated() {
    let (a, a_log) = FailingProvider::new("a");
    let (b, b_log) = FailingProvider::new("b");
    let (c, c_log) = FailingProvider::new("c");
    let service = service(vec![Box::new(a), Box::new(b), Box::new(c)]);

    let input = "你好吗?？ 今天 <b>很好</b>";
    let result = service.translate_mixed_script(input, Language::Vietnamese).await;

    assert_eq!(result, normalize_question_marks(input));
    for log in [&a_log, &b_log, &c_log] {
        assert_eq!(texts(log), ["你好吗", "今天", "很好"]);
    }
}

#[tokio::test]
async fn text_without_chinese_makes_no_requests() {
    let (dict, log) = DictionaryProvider::new("dict", &[]);
    let service = service(vec![Box::new(dict)]);

    let input = "plain ASCII, 123 & <markup/>";
    let result = service.translate_mixed_script(input, Language::English).await;

    assert_eq!(result, input);
    assert!(texts(&log).is_empty());
}

#[tokio::test]
async fn empty_input_is_returned_unchanged() {
    let (dict, log) = DictionaryProvider::new("dict", &[]);
    let service = service(vec![Box::new(dict)]);

    assert_eq!(service.translate_mixed_script("", Language::English).await, "");
    assert_eq!(service.translate_mixed_script_reverse("").await, "");
    assert!(texts(&log).is_empty());
}

#[tokio::test]
async fn reverse_direction_translates_each_word() {
    let (dict, log) = DictionaryProvider::new(
        "dict",
        &[("I", "我"), ("love", "爱"), ("Rust", "锈")],
    );
    let service = service(vec![Box::new(dict)]);

    let result = service
        .translate_mixed_script_reverse("I love Rust 2024!")
        .await;

    assert_eq!(result, "我 爱 锈 2024!");
    assert_eq!(texts(&log), ["I", "love", "Rust"]);
    let request = log.lock().unwrap()[0].clone();
    assert_eq!(request.source_lang, Language::English);
    assert_eq!(request.target_lang, Language::ChineseSimplified);
}

#[tokio::test]
async fn reverse_direction_keeps_existing_chinese() {
    let (dict, log) = DictionaryProvider::new("dict", &[("OK", "好的")]);
    let service = service(vec![Box::new(dict)]);

    let result = service.translate_mixed_script_reverse("已经 OK").await;

    assert_eq!(result, "已经 好的");
    assert_eq!(texts(&log), ["OK"]);
}

fn converter_with(providers: Vec<Box<dyn TranslationProvider>>) -> ChineseConverter {
    ChineseConverter::with_service(ScriptConverter::new().unwrap(), service(providers))
}

#[tokio::test]
async fn traditional_output_is_converted_after_translation() {
    let (dict, _) = DictionaryProvider::new("dict", &[("language", "语言")]);
    let converter = converter_with(vec![Box::new(dict)]);

    assert_eq!(converter.translate_to_chinese_simplified("language").await, "语言");
    assert_eq!(converter.translate_to_chinese_traditional("language").await, "語言");
}

#[tokio::test]
async fn run_dispatches_every_action() {
    let (dict, _) = DictionaryProvider::new(
        "dict",
        &[("汉语", "Chinese"), ("Chinese", "汉语")],
    );
    let converter = converter_with(vec![Box::new(dict)]);

    assert_eq!(converter.run(Action::Simplify, "漢語").await, "汉语");
    assert_eq!(converter.run(Action::Traditionalize, "汉语").await, "漢語");
    assert_eq!(converter.run(Action::TranslateEn, "学汉语").await, "学汉语");
    assert_eq!(converter.run(Action::TranslateDe, "汉语").await, "Chinese");
    assert_eq!(converter.run(Action::TranslateVi, "汉语!").await, "Chinese!");
    assert_eq!(converter.run(Action::TranslateZhSimp, "Chinese").await, "汉语");
    assert_eq!(converter.run(Action::TranslateZhTrad, "Chinese").await, "漢語");
}

#[test]
fn script_conversion_is_not_required_to_round_trip() {
    let converter = ScriptConverter::new().unwrap();
    let simplified = converter.to_simplified("頭髮");
    assert_eq!(simplified, "头发");
    // 发 has more than one traditional form
    let traditional = converter.to_traditional(&simplified);
    assert_eq!(traditional.chars().count(), 2);
}
