//! PBT テスト共通ユーティリティ

use std::future::Future;

use proptest::prelude::*;

/// 非同期処理を current-thread ランタイムで実行
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build runtime")
        .block_on(future)
}

// ========================================
// HTTP 要素の生成
// ========================================

/// ヘッダー名 (token 文字のみ、大文字小文字混在)
pub fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,31}".prop_map(|s| s)
}

/// ヘッダー値 (前後の空白なし、VCHAR と内部の SP)
pub fn header_value() -> impl Strategy<Value = String> {
    "[!-~]([ !-~]{0,62}[!-~])?".prop_map(|s| s)
}

/// 空白を含まないパス
pub fn path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        "/[a-zA-Z0-9/_.%?=&-]{1,64}".prop_map(|s| s),
    ]
}

/// `/echo/` の後ろに置ける値
pub fn echo_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/_.-]{0,64}".prop_map(|s| s)
}

/// ボディ
pub fn body() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..512)
}

/// ヘッダー名の大文字小文字をランダムに変える
pub fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
