// SPDX-License-Identifier: Apache-2.0

//! Translation of the reference `test.cpp` suite: verbose mode, a deeper
//! nesting, and two sibling `then` blocks that each crash in a different
//! way (a null dereference, a busy loop) before ever reaching their
//! `require` calls.

use proctor::{Grader, GraderConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut grader = Grader::new(GraderConfig::new().with_verbose(true));

    grader.scenario("Outer 1", |grader| {
        grader.given("Inner 1", |grader| {
            grader.when("Part 2", |grader| {
                grader.then_points(10, "A", |grader| {
                    let x: *const i32 = std::ptr::null();
                    println!("{}", unsafe { *x });
                    grader.require("this is false", false);
                });
                grader.then_points(10, "B", |grader| {
                    #[allow(clippy::empty_loop)]
                    loop {}
                    #[allow(unreachable_code)]
                    grader.require("this is false", false);
                });
            });
        });
    });

    std::process::exit(grader.finish());
}
