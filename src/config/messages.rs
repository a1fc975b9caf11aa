// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing text.
//!
//! ```text
//! [messages]
//!   menu_title, menu_items (10), choice_prompt
//!   invalid_choice_message, exit_message, sort_confirmation
//! [messages.add_book_prompts]        title, author, id, invalid_id, added
//! [messages.remove_book_prompts]     prompt, removed
//! [messages.add_borrower_prompts]    name, added
//! [messages.remove_borrower_prompts] prompt, removed
//! [messages.search_prompts]          book*, borrower*
//! [messages.display_labels]          field labels, empty messages
//! ```
//!
//! Prompts are printed without a trailing newline; everything else is
//! printed as a full line. Defaults are Traditional Chinese.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::model::{Book, Borrower};

/// Number of entries `menu_items` must hold.
pub const MENU_ITEM_COUNT: usize = 10;

/// Complete prompt and response table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub menu_title: String,
    /// Menu labels for choices 1 through 10, in order.
    pub menu_items: Vec<String>,
    pub choice_prompt: String,
    pub invalid_choice_message: String,
    pub exit_message: String,
    pub sort_confirmation: String,
    pub add_book_prompts: AddBookPrompts,
    pub remove_book_prompts: RemovePrompts,
    pub add_borrower_prompts: AddBorrowerPrompts,
    pub remove_borrower_prompts: RemovePrompts,
    pub search_prompts: SearchPrompts,
    pub display_labels: DisplayLabels,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            menu_title: "圖書館管理系統".into(),
            menu_items: [
                "添加新圖書",
                "刪除圖書",
                "搜索圖書",
                "顯示所有圖書",
                "排序圖書",
                "添加新借閱者",
                "刪除借閱者",
                "搜索借閱者",
                "顯示所有借閱者",
                "退出",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            choice_prompt: "輸入你的選擇: ".into(),
            invalid_choice_message: "無效的選擇，請重試。".into(),
            exit_message: "退出...".into(),
            sort_confirmation: "圖書已按圖書編號排序。".into(),
            add_book_prompts: AddBookPrompts::default(),
            remove_book_prompts: RemovePrompts {
                prompt: "輸入要刪除的圖書編號: ".into(),
                removed: "圖書及相關借閱記錄已成功刪除。".into(),
            },
            add_borrower_prompts: AddBorrowerPrompts::default(),
            remove_borrower_prompts: RemovePrompts {
                prompt: "輸入要刪除的借閱者姓名: ".into(),
                removed: "借閱者已成功刪除。".into(),
            },
            search_prompts: SearchPrompts::default(),
            display_labels: DisplayLabels::default(),
        }
    }
}

impl Messages {
    /// Menu lines as printed: `1. label` through `10. label`.
    #[must_use]
    pub fn menu_lines(&self) -> Vec<String> {
        self.menu_items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddBookPrompts {
    pub title: String,
    pub author: String,
    pub id: String,
    /// Printed after each rejected id, before asking again.
    pub invalid_id: String,
    pub added: String,
}

impl Default for AddBookPrompts {
    fn default() -> Self {
        Self {
            title: "輸入書名: ".into(),
            author: "輸入作者名稱: ".into(),
            id: "輸入圖書編號 (首位為英文字母 + 4位數字): ".into(),
            invalid_id: "不符合規定，請重新輸入".into(),
            added: "圖書已成功添加。".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AddBorrowerPrompts {
    pub name: String,
    pub added: String,
}

impl Default for AddBorrowerPrompts {
    fn default() -> Self {
        Self {
            name: "輸入借閱者姓名: ".into(),
            added: "借閱者已成功添加。".into(),
        }
    }
}

/// Prompt and confirmation shared by both remove operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemovePrompts {
    pub prompt: String,
    /// Printed whether or not anything matched.
    pub removed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPrompts {
    pub book: String,
    /// Prefix written before the matching book's fields.
    pub book_found: String,
    pub book_not_found: String,
    pub borrower: String,
    /// Prefix written before the matching borrower's fields.
    pub borrower_found: String,
    pub borrower_not_found: String,
}

impl Default for SearchPrompts {
    fn default() -> Self {
        Self {
            book: "輸入要搜索的圖書編號: ".into(),
            book_found: "找到圖書 - ".into(),
            book_not_found: "未找到圖書。".into(),
            borrower: "輸入要搜索的借閱者姓名: ".into(),
            borrower_found: "找到借閱者 - ".into(),
            borrower_not_found: "未找到借閱者。".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayLabels {
    pub title: String,
    pub author: String,
    pub id: String,
    pub name: String,
    pub borrowed_books: String,
    pub no_books: String,
    pub no_borrowers: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            title: "書名".into(),
            author: "作者".into(),
            id: "圖書編號".into(),
            name: "姓名".into(),
            borrowed_books: "借閱的圖書編號".into(),
            no_books: "圖書館中沒有圖書。".into(),
            no_borrowers: "沒有借閱者。".into(),
        }
    }
}

impl DisplayLabels {
    /// `title: T, author: A, id: I`
    #[must_use]
    pub fn book_line(&self, book: &Book) -> String {
        format!(
            "{}: {}, {}: {}, {}: {}",
            self.title, book.title, self.author, book.author, self.id, book.id
        )
    }

    /// `name: N, borrowed: ID ID ` with every id followed by one space.
    #[must_use]
    pub fn borrower_line(&self, borrower: &Borrower) -> String {
        let mut line = format!(
            "{}: {}, {}: ",
            self.name, borrower.name, self.borrowed_books
        );
        for id in &borrower.borrowed_books {
            let _ = write!(line, "{id} ");
        }
        line
    }
}
