#![no_main]

use libfuzzer_sys::fuzz_target;
use mini_http11::router::{Endpoint, resolve};
use mini_http11::{Config, Router, WireReader, decode_request, encode_response};

fuzz_target!(|data: &[u8]| {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let router = Router::new(&Config::with_directory("/nonexistent"));

    runtime.block_on(async {
        let mut reader = WireReader::new(data);
        let Ok(request) = decode_request(&mut reader).await else {
            return;
        };
        // ファイルルートは触らない
        if matches!(
            resolve(request.method(), request.path()),
            Endpoint::ReadFile | Endpoint::WriteFile
        ) {
            return;
        }
        let response = router.route(&request).await.unwrap();
        let bytes = encode_response(response).unwrap();
        assert!(bytes.starts_with(b"HTTP/1.1 "));
    });
});
