// SPDX-License-Identifier: Apache-2.0

//! §8 scenario 6: two sibling `when(10, …)` blocks under one `given`, one
//! all-pass and one with a single failing `require`.

use proctor::{Grader, GraderConfig};

fn main() {
    let mut grader = Grader::new(GraderConfig::new());
    grader.given("two tests", |grader| {
        grader.when_points(10, "first", |grader| {
            grader.then("passes", |grader| {
                grader.require("t", true);
            });
        });
        grader.when_points(10, "second", |grader| {
            grader.then("fails", |grader| {
                grader.require("t", false);
            });
        });
    });
    std::process::exit(grader.finish());
}
