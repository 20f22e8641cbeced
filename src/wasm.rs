use crate::headtail;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn f64_vec_to_js_array(data: Vec<f64>) -> Array {
    data.into_iter().map(JsValue::from_f64).collect()
}

fn usize_vec_to_js_array(data: Vec<usize>) -> Array {
    data.into_iter().map(|n| JsValue::from_f64(n as f64)).collect()
}

/// Classify `data` using head/tail breaks.
///
/// Returns `null` if fewer than two classes are requested, otherwise an Array of
/// `[breaks, sizes, members]`.
#[wasm_bindgen]
pub fn headtail_wasm(data: &[f64], classes: i32) -> Result<JsValue, JsError> {
    let Some(ht) = headtail(data, classes).map_err(|e| JsError::new(&e.to_string()))? else {
        return Ok(JsValue::NULL);
    };
    let result = Array::new();
    result.push(&f64_vec_to_js_array(ht.breaks));
    result.push(&usize_vec_to_js_array(ht.sizes));
    result.push(&usize_vec_to_js_array(ht.members));
    Ok(result.into())
}
