//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte para
//! argumentos CLI y variables de entorno.
//!
//! La configuración se lee una sola vez al arrancar y se pasa explícita
//! al router; ningún módulo vuelve a mirar `std::env::args`.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http --port 4221 --directory /tmp/archivos
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/archivos ./mini_http
//! ```

use clap::Parser;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http")]
#[command(about = "Servidor HTTP/1.1 minimalista con rutas echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio servido por la ruta /files (opcional; sin él la ruta
    /// responde 404)
    #[arg(long, env = "FILES_DIR")]
    pub directory: Option<String>,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Address:    {}", self.address());
        match &self.directory {
            Some(dir) => println!("   Files dir:  {}", dir),
            None => println!("   Files dir:  (sin configurar, /files responde 404)"),
        }
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto (la del enunciado: 0.0.0.0:4221)
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: None,
        }
    }
}
