//! End-to-end tests
//!
//! Compiles expressions and runs the result on the simulator

mod arithmetic;
