//! Bridge to the host page's service-invocation function.

use poolcard_app::ports::ServiceCaller;
use poolcard_domain::service::ServiceCall;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = poolcardHost, js_name = callService)]
    fn host_call_service(domain: &str, service: &str, data: JsValue);
}

/// [`ServiceCaller`] forwarding to `window.poolcardHost.callService`.
///
/// Calls are fire-and-forget: failures are reported by the page itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsHost;

impl ServiceCaller for JsHost {
    type Outcome = ();

    fn call_service(&self, call: ServiceCall) {
        let data = serde_json::Value::Object(call.data).to_string();
        let data = json_parse(&data);
        host_call_service(call.domain, call.service, data);
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON, js_name = parse)]
    fn json_parse(text: &str) -> JsValue;
}
