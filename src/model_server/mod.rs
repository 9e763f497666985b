// file: src/model_server/mod.rs
// description: model serving endpoint module exports
// reference: internal module structure

pub mod responder;

pub use responder::Responder;
