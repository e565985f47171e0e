// SPDX-License-Identifier: Apache-2.0

//! §8 scenario 4: `when(2, "x", then("y", <segfault>; require("t", true)))`.

use proctor::{Grader, GraderConfig};

fn main() {
    let mut grader = Grader::new(GraderConfig::new());
    grader.when_points(2, "x", |grader| {
        grader.then("y", |grader| {
            let x: *const i32 = std::ptr::null();
            let _ = unsafe { *x };
            grader.require("t", true);
        });
    });
    std::process::exit(grader.finish());
}
