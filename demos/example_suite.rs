// SPDX-License-Identifier: Apache-2.0

//! Translation of the reference `example.cpp` suite: a handful of
//! point-bearing `when` blocks, including a segfault and a busy loop,
//! nested under one scenario.

use proctor::{Grader, GraderConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut grader = Grader::new(GraderConfig::new());

    grader.scenario("The testing framework functions as expected", |grader| {
        grader.given("A scenario", |grader| {
            grader.when_points(
                16,
                "Points are defined on the 'when' clause and we have a true assertion",
                |grader| {
                    grader.then("we earn points", |grader| {
                        grader.require("this is true", true);
                    });
                },
            );

            grader.when_points(
                8,
                "Points are defined on the 'then' clause and multiple assertions where one is false",
                |grader| {
                    grader.then("we do not earn points", |grader| {
                        grader.require("this first assertion is true", true);
                        grader.require("this second assertion is false", false);
                    });
                },
            );

            grader.when_points(
                4,
                "Points are defined on the 'then' clause and multiple assertions where one is false",
                |grader| {
                    grader.then("we do not earn points", |grader| {
                        grader.require("this first assertion is false", false);
                        grader.require("this second assertion is true", true);
                    });
                },
            );

            grader.when_points(2, "We test an invalid memory access", |grader| {
                let x: *const i32 = std::ptr::null();
                // Deliberately fatal: this block should be credited as a
                // failure without losing points already earned elsewhere.
                let _ = unsafe { *x };
                grader.then("we do not earn points and we detect it!", |grader| {
                    grader.require("this is true", true);
                });
            });

            grader.when_points(1, "We test an infinite loop", |grader| {
                #[allow(clippy::empty_loop)]
                loop {}
                #[allow(unreachable_code)]
                grader.then("we do not earn points and we detect it!", |grader| {
                    grader.require("this is true", true);
                });
            });
        });
    });

    std::process::exit(grader.finish());
}
