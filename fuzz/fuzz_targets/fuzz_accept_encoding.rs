#![no_main]

use libfuzzer_sys::fuzz_target;
use mini_http11::content_encoding::AcceptEncoding;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let accept = AcceptEncoding::parse(s);
        // 選ばれるのは受け入れ可能なコーディングのみ
        if let Some(coding) = accept.negotiate() {
            assert!(accept.accepts(&coding));
            assert!(coding.is_supported());
        }
    }
});
