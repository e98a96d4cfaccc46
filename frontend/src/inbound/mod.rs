//! Inbound adapters that translate browser requests into Resource Client
//! calls while keeping framework details at the edge.

pub mod http;
