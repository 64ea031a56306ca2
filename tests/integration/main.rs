#![allow(clippy::expect_used, clippy::panic, dead_code)]


mod probe;
