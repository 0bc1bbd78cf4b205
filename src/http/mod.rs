//! # Módulo HTTP
//!
//! Este módulo implementa el núcleo del protocolo desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests HTTP/1.1
//! - Construcción de responses HTTP
//! - Manejo de status codes
//!
//! ## Alcance
//!
//! Esto NO es un servidor HTTP de propósito general: una request por
//! conexión, una sola lectura de tamaño fijo, sin keep-alive, sin chunked
//! transfer encoding y sin compresión.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! \r\n
//! hola
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
