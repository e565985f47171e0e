// SPDX-License-Identifier: Apache-2.0

//! §8 scenario 3: `when(4, "x", then("y", { require("a", false); require("b", true) }))`.

use proctor::{Grader, GraderConfig};

fn main() {
    let mut grader = Grader::new(GraderConfig::new());
    grader.when_points(4, "x", |grader| {
        grader.then("y", |grader| {
            grader.require("a", false);
            grader.require("b", true);
        });
    });
    std::process::exit(grader.finish());
}
