//! JSON web API for genotype interpretation.
//!
//! This module serves the interpreter over HTTP using Axum.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! coat-decoder serve
//!
//! # Custom port and auto-open browser
//! coat-decoder serve --port 3000 --open
//!
//! # Bind to all interfaces
//! coat-decoder serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/interpret` - Interpret `{"genotypes": {...}}` or `{"report": "...", "layout": ...}`
//! - `GET /api/loci` - List recognized loci and their genotype codes
//! - `GET /health` - Liveness check

pub mod server;
