//! # mini_http
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista y concurrente implementado desde cero:
//! una request por conexión, una lectura de tamaño fijo, un thread por
//! conexión, y cuatro rutas fijas (/, /echo, /user-agent, /files).
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests y construcción de responses HTTP/1.1
//! - `router`: Mapeo de requests a las rutas fijas
//! - `server`: Loop de accept TCP y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http::config::Config;
//! use mini_http::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod http;
pub mod router;
pub mod server;
