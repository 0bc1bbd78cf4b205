//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo mapea un request parseado a su respuesta.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Response
//! ```
//!
//! Las rutas son fijas y se evalúan en orden, gana el primer match:
//!
//! 1. `/files...`     → lectura/escritura de archivos (ver [`files`])
//! 2. `/user-agent`   → devuelve el header User-Agent del cliente
//! 3. `/echo/{texto}` → devuelve {texto}
//! 4. `/`             → health check, 200 con body vacío
//! 5. cualquier otro  → 404 Not Found
//!
//! El router es una función pura salvo por el acceso a archivos de la
//! ruta `/files`. El directorio servido se le pasa explícitamente al
//! construirlo; no hay estado global.

use crate::http::{Request, Response, StatusCode};
use std::path::{Path, PathBuf};

pub mod files;

/// Router con las rutas fijas del servidor
pub struct Router {
    /// Directorio servido por la ruta /files; `None` si no se configuró
    directory: Option<PathBuf>,
}

impl Router {
    /// Crea un router, con o sin directorio servido
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::router::Router;
    /// use std::path::PathBuf;
    ///
    /// let router = Router::new(Some(PathBuf::from("/tmp/archivos")));
    /// ```
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    /// Obtiene el directorio servido configurado
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Mapea un request a su respuesta
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::{Request, StatusCode};
    /// use mini_http::router::Router;
    ///
    /// let router = Router::new(None);
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\n\r\n").unwrap();
    /// let response = router.route(&request);
    ///
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"hola");
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        if path.starts_with("/files") {
            files::handle(request, self.directory())
        } else if path.starts_with("/user-agent") {
            // Sin header User-Agent el body queda vacío
            let agent = request.header("User-Agent").unwrap_or("");
            Response::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body(agent)
        } else if let Some(text) = path.strip_prefix("/echo/") {
            Response::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body(text)
        } else if path == "/" {
            Response::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body("")
        } else {
            Response::new(StatusCode::NotFound)
                .with_content_type("text/plain")
                .with_body("404 Not Found")
        }
    }
}
