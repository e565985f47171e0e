// SPDX-License-Identifier: Apache-2.0

//! §8 scenario 2: `when(8, "x", then("y", { require("a", true); require("b", false) }))`.

use proctor::{Grader, GraderConfig};

fn main() {
    let mut grader = Grader::new(GraderConfig::new());
    grader.when_points(8, "x", |grader| {
        grader.then("y", |grader| {
            grader.require("a", true);
            grader.require("b", false);
        });
    });
    std::process::exit(grader.finish());
}
