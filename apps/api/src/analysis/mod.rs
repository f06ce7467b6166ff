// Analysis pipeline: extraction → scoring → recommendation, plus the cached
// service and HTTP handlers around it.

pub mod context;
pub mod handlers;
pub mod pipeline;
pub mod service;
