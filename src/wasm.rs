use wasm_bindgen::prelude::*;

use crate::{MagicSquare, construct};

/// Largest order `generate` accepts: 256 MiB of cells, well inside a
/// 32-bit linear memory.
const WASM_MAX_ORDER: u32 = 8192;

/// Convert a MagicSquare to a JsValue (2D array of numbers).
fn magic_square_to_js(sq: &MagicSquare) -> Result<JsValue, JsError> {
    let rows: Vec<Vec<u32>> = sq.rows().map(<[u32]>::to_vec).collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| JsError::new(&e.to_string()))
}

fn checked_order(n: u32) -> Result<usize, String> {
    if n > WASM_MAX_ORDER {
        return Err(format!(
            "invalid size {n}: order must be at most {WASM_MAX_ORDER}"
        ));
    }
    Ok(n as usize)
}

/// Construct a magic square of order n.
/// Returns a 2D array directly usable in JavaScript.
///
/// Orders that are 0, 2, a multiple of 4, or above 8192 are rejected with an
/// error.
#[wasm_bindgen]
pub fn generate(n: u32) -> Result<JsValue, JsError> {
    let n = checked_order(n).map_err(|e| JsError::new(&e))?;
    let sq = construct(n).map_err(|e| JsError::new(&e.to_string()))?;
    magic_square_to_js(&sq)
}

/// The magic constant `n(n² + 1) / 2` for order n.
///
/// Fails for orders whose constant does not fit in 64 bits.
#[wasm_bindgen(js_name = magicConstant)]
pub fn magic_constant(n: u32) -> Result<f64, JsError> {
    crate::magic_constant(n as usize)
        .map(|m| m as f64)
        .ok_or_else(|| JsError::new(&format!("magic constant of order {n} is out of range")))
}
