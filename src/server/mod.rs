//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en la dirección configurada
//! 2. Acepta conexiones entrantes
//! 3. Lanza un thread por conexión que lee, parsea, rutea y responde

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
