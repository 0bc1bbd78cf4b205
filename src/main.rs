//! # mini_http - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración, arma el
//! servidor y entra al loop de accept. Cualquier fallo de bind o de
//! accept termina el proceso con estado distinto de cero.

use mini_http::config::Config;
use mini_http::server::Server;

fn main() {
    println!("=================================");
    println!("  mini_http HTTP/1.1 Server");
    println!("=================================\n");

    // Configuración desde CLI y variables de entorno
    let config = Config::new();
    config.print_summary();

    // Crear el servidor (el directorio servido queda fijado en el router)
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
