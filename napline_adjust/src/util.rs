// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers that do not need `std`.

/// Round to the nearest whole minute, halves away from zero.
///
/// Values beyond the `i32` range saturate.
#[allow(
    clippy::cast_possible_truncation,
    reason = "pointer-derived minute counts are far inside i32; `as` saturates otherwise"
)]
pub(crate) fn round_to_minutes(x: f64) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        -((-x + 0.5) as i32)
    }
}
