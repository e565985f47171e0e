// SPDX-License-Identifier: Apache-2.0

//! §8 scenario 1: `when(16, "x", then("y", require("t", true)))`.

use proctor::{Grader, GraderConfig};

fn main() {
    let mut grader = Grader::new(GraderConfig::new());
    grader.when_points(16, "x", |grader| {
        grader.then("y", |grader| {
            grader.require("t", true);
        });
    });
    std::process::exit(grader.finish());
}
