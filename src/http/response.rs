//! # Construcción de Respuestas HTTP
//!
//! Este módulo representa el resultado del routing (status, content type,
//! body) y lo serializa al formato de wire HTTP/1.1.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```
//!
//! ## Particularidades intencionales
//!
//! - `Content-Type` solo se emite si la ruta lo fijó.
//! - `Content-Length` solo se emite si la ruta lo fijó explícitamente y es
//!   distinto de cero. Las rutas echo/user-agent/404 mandan body SIN
//!   `Content-Length`; el cliente lee hasta el cierre de la conexión.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mini_http::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body("hola");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;

/// Representa una respuesta HTTP/1.1 completa antes de serializar
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 201, 400, 404)
    status: StatusCode,

    /// Content-Type a emitir; `None` = no se emite el header
    content_type: Option<String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,

    /// Content-Length explícito; `None` = no se emite el header
    content_length: Option<usize>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto no tiene content type, ni body, ni content length.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
            content_length: None,
        }
    }

    /// Fija el header `Content-Type` de la respuesta
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Nota: NO fija `Content-Length`; las rutas de texto no lo mandan y
    /// el cliente lee hasta el cierre de la conexión.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo desde bytes y fija `Content-Length`
    ///
    /// Útil para respuestas binarias (la ruta GET /files).
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::{Response, StatusCode};
    ///
    /// let data = vec![0x89, 0x50, 0x4E, 0x47]; // PNG header
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_content_type("application/octet-stream")
    ///     .with_body_bytes(data);
    ///
    /// let text = String::from_utf8_lossy(&response.to_bytes()).to_string();
    /// assert!(text.contains("Content-Length: 4\r\n"));
    /// ```
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.content_length = Some(body.len());
        self.body = body;
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.1:
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - `Content-Type: ...\r\n` (solo si está fijado)
    /// - `Content-Length: n\r\n` (solo si está fijado y n > 0)
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario tal cual
    ///
    /// La respuesta completa se arma en un solo buffer; no hay streaming
    /// ni chunked encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Content-Type (opcional)
        if let Some(content_type) = &self.content_type {
            let header_line = format!("Content-Type: {}\r\n", content_type);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Content-Length (solo explícito y no-cero)
        if let Some(length) = self.content_length {
            if length > 0 {
                let header_line = format!("Content-Length: {}\r\n", length);
                result.extend_from_slice(header_line.as_bytes());
            }
        }

        // 4. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 5. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el Content-Type fijado, si lo hay
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
