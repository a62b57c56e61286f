#![no_main]

use libfuzzer_sys::fuzz_target;
use mini_http11::{WireReader, decode_request};

fuzz_target!(|data: &[u8]| {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    runtime.block_on(async {
        // 一度に読める場合
        let mut reader = WireReader::new(data);
        let _ = decode_request(&mut reader).await;

        // 小さいバッファで少しずつ読む場合 (ストリーミングシナリオ)
        let mut reader = WireReader::with_capacity(17, data);
        if let Ok(request) = decode_request(&mut reader).await {
            // ボディ長は Content-Length と一致する
            // 空の Content-Length はボディなし
            match request.get_header("content-length") {
                Some("") | None => assert!(request.body_bytes().is_empty()),
                Some(len) => {
                    assert_eq!(len.parse::<usize>().ok(), Some(request.body_bytes().len()))
                }
            }
        }
    });
});
