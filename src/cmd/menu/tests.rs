// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{BufRead, ErrorKind};

use super::{MenuChoice, Session, SessionEnd};
use crate::catalog::Catalog;
use crate::config::messages::Messages;
use crate::console::Console;
use crate::console::test_utils::{ScriptedInput, Step};
use crate::error::ConsoleError;
use crate::registry::Registry;
use crate::seed;

struct Outcome {
    end: SessionEnd,
    output: String,
    catalog: Catalog,
    registry: Registry,
}

fn run_script(input: &str) -> Outcome {
    run_script_with(input, seed::sample_catalog(), seed::sample_registry())
}

fn run_script_with(input: &str, catalog: Catalog, registry: Registry) -> Outcome {
    run_input(input.as_bytes(), catalog, registry)
}

fn run_input<R: BufRead>(input: R, catalog: Catalog, registry: Registry) -> Outcome {
    let messages = Messages::default();
    let console = Console::new(input, Vec::new());
    let mut session = Session::new(console, &messages, catalog, registry);
    let end = session.run().unwrap();
    let (console, catalog, registry) = session.into_parts();
    Outcome {
        end,
        output: String::from_utf8(console.into_output()).unwrap(),
        catalog,
        registry,
    }
}

#[test]
fn test_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddBook));
    assert_eq!(MenuChoice::parse(" 10 "), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("9\r"), Some(MenuChoice::DisplayBorrowers));
    for bad in ["0", "11", "-1", "", "abc", "1.5", "3abc", "99999999999999999999"] {
        assert_eq!(MenuChoice::parse(bad), None, "{bad:?}");
    }
}

#[test]
fn test_choice_numbers_follow_menu_order() {
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        let number = i64::try_from(i + 1).unwrap();
        assert_eq!(MenuChoice::from_number(number), Some(*choice));
    }
}

#[test]
fn test_exit_transcript() {
    let outcome = run_script("10\n");
    assert_eq!(outcome.end, SessionEnd::Exit);
    assert_eq!(
        outcome.output,
        "圖書館管理系統\n\
         1. 添加新圖書\n\
         2. 刪除圖書\n\
         3. 搜索圖書\n\
         4. 顯示所有圖書\n\
         5. 排序圖書\n\
         6. 添加新借閱者\n\
         7. 刪除借閱者\n\
         8. 搜索借閱者\n\
         9. 顯示所有借閱者\n\
         10. 退出\n\
         輸入你的選擇: 退出...\n"
    );
}

#[test]
fn test_eof_ends_session_without_exit_message() {
    let outcome = run_script("");
    assert_eq!(outcome.end, SessionEnd::InputClosed);
    assert!(!outcome.output.contains("退出..."));
}

#[test]
fn test_invalid_choices_loop() {
    let outcome = run_script("0\nabc\n\n11\n10\n");
    assert_eq!(outcome.end, SessionEnd::Exit);
    assert_eq!(outcome.output.matches("無效的選擇，請重試。\n").count(), 4);
    assert_eq!(outcome.output.matches("圖書館管理系統\n").count(), 5);
}

#[test]
fn test_add_book_retries_until_valid_id() {
    let outcome = run_script("1\n測試\n作者\nAB123\n12345\nZ9999\n10\n");

    assert_eq!(outcome.output.matches("不符合規定，請重新輸入\n").count(), 2);
    assert!(outcome.output.contains("圖書已成功添加。\n"));
    assert_eq!(outcome.catalog.len(), 11);
    let last = outcome.catalog.as_slice().last().unwrap();
    assert_eq!(
        (last.title.as_str(), last.author.as_str(), last.id.as_str()),
        ("測試", "作者", "Z9999")
    );
}

#[test]
fn test_add_book_eof_during_retry_stops() {
    let outcome = run_script("1\n測試\n作者\nbad\n");
    assert_eq!(outcome.end, SessionEnd::InputClosed);
    assert_eq!(outcome.catalog.len(), 10);
}

#[test]
fn test_add_then_search_round_trip() {
    let outcome = run_script("1\n測試\n作者\nZ9999\n3\nZ9999\n10\n");
    assert!(
        outcome
            .output
            .contains("輸入要搜索的圖書編號: 找到圖書 - 書名: 測試, 作者: 作者, 圖書編號: Z9999\n")
    );
}

#[test]
fn test_search_book_miss() {
    let outcome = run_script("3\nQ0000\n10\n");
    assert!(outcome.output.contains("未找到圖書。\n"));
}

#[test]
fn test_remove_book_cascades_to_borrower() {
    let outcome = run_script("2\nA1234\n8\n小明\n10\n");

    assert!(outcome.output.contains("圖書及相關借閱記錄已成功刪除。\n"));
    assert!(
        outcome
            .output
            .contains("找到借閱者 - 姓名: 小明, 借閱的圖書編號: B2345 \n")
    );
    assert!(outcome.catalog.find_by_id("A1234").is_none());
}

#[test]
fn test_remove_missing_still_reports_success() {
    let outcome = run_script("2\nQ0000\n7\n無名氏\n10\n");

    assert!(outcome.output.contains("圖書及相關借閱記錄已成功刪除。\n"));
    assert!(outcome.output.contains("借閱者已成功刪除。\n"));
    assert_eq!(outcome.catalog, seed::sample_catalog());
    assert_eq!(outcome.registry, seed::sample_registry());
}

#[test]
fn test_display_books_empty() {
    let outcome = run_script_with("4\n9\n10\n", Catalog::new(), Registry::new());
    assert!(outcome.output.contains("圖書館中沒有圖書。\n"));
    assert!(outcome.output.contains("沒有借閱者。\n"));
}

#[test]
fn test_sort_then_display() {
    let catalog: Catalog = [
        crate::model::Book::new("乙", "b", "B0001"),
        crate::model::Book::new("甲", "a", "A0001"),
    ]
    .into_iter()
    .collect();
    let outcome = run_script_with("5\n4\n10\n", catalog, Registry::new());

    let sorted = "圖書已按圖書編號排序。\n";
    let start = outcome.output.find(sorted).unwrap() + sorted.len();
    let listing = &outcome.output[start..];
    let first = listing.find("A0001").unwrap();
    let second = listing.find("B0001").unwrap();
    assert!(first < second);
}

#[test]
fn test_borrower_add_search_remove() {
    let outcome = run_script("6\n小新\n8\n小新\n7\n小新\n8\n小新\n10\n");

    assert!(outcome.output.contains("借閱者已成功添加。\n"));
    assert!(
        outcome
            .output
            .contains("找到借閱者 - 姓名: 小新, 借閱的圖書編號: \n")
    );
    assert!(outcome.output.contains("未找到借閱者。\n"));
    assert_eq!(outcome.registry, seed::sample_registry());
}

#[test]
fn test_invalid_utf8_search_answer_is_a_miss() {
    let outcome = run_input(
        &b"3\n\xff\xfe\n10\n"[..],
        seed::sample_catalog(),
        seed::sample_registry(),
    );

    assert_eq!(outcome.end, SessionEnd::Exit);
    assert!(outcome.output.contains("未找到圖書。\n"));
    assert!(outcome.output.ends_with("退出...\n"));
}

#[test]
fn test_invalid_utf8_menu_choice_is_invalid() {
    let outcome = run_input(&b"\xff\n10\n"[..], Catalog::new(), Registry::new());

    assert_eq!(outcome.end, SessionEnd::Exit);
    assert_eq!(outcome.output.matches("無效的選擇，請重試。\n").count(), 1);
}

#[test]
fn test_invalid_utf8_id_is_rejected_by_retry_loop() {
    let outcome = run_input(
        &b"1\n\xffT\nW\nA\xff123\nZ9999\n10\n"[..],
        Catalog::new(),
        Registry::new(),
    );

    assert_eq!(outcome.end, SessionEnd::Exit);
    assert_eq!(outcome.output.matches("不符合規定，請重新輸入\n").count(), 1);
    let book = outcome.catalog.find_by_id("Z9999").unwrap();
    assert_eq!(book.title, "\u{fffd}T");
}

#[test]
fn test_interrupted_read_inside_id_retry_loop() {
    let input = ScriptedInput::reader([
        Step::Bytes(b"1\nT\nW\nbad\n"),
        Step::Fail(ErrorKind::Interrupted),
        Step::Bytes(b"Z9999\n10\n"),
    ]);
    let outcome = run_input(input, Catalog::new(), Registry::new());

    assert_eq!(outcome.end, SessionEnd::Exit);
    assert_eq!(outcome.output.matches("不符合規定，請重新輸入\n").count(), 1);
    assert_eq!(outcome.catalog.len(), 1);
}

#[test]
fn test_broken_input_inside_id_retry_loop_is_reported() {
    let input = ScriptedInput::reader([
        Step::Bytes(b"1\nT\nW\nbad\n"),
        Step::Fail(ErrorKind::BrokenPipe),
    ]);
    let messages = Messages::default();
    let mut session = Session::new(
        Console::new(input, Vec::new()),
        &messages,
        Catalog::new(),
        Registry::new(),
    );

    let err = session.run().unwrap_err();
    assert!(matches!(err, ConsoleError::Read(ref e) if e.kind() == ErrorKind::BrokenPipe));
    assert!(session.catalog().is_empty());
}
