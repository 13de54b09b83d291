//! Integration tests across the public emitter API

mod emitter;
mod harness;
mod invariants;
