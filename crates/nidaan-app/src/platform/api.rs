//! Single-method client for the symptom-analysis endpoint.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use nidaan_core::analysis::{AnalysisRequest, AnalysisResponse};

pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// POSTs the combined symptom text and parses the JSON response. Any
/// transport failure or non-2xx status is an error; the caller decides how to
/// surface it.
pub async fn analyze_symptoms(text: &str) -> Result<AnalysisResponse, String> {
    let body = serde_json::to_string(&AnalysisRequest { text: text.to_string() })
        .map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("content-type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers.into());
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{API_BASE_URL}/api/analyze/symptoms");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_js = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {e:?}"))?;
    let response: Response = resp_js.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let json = JsFuture::from(response.json().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("JSON read failed: {e:?}"))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Malformed response: {e}"))
}
