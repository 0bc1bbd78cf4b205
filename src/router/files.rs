//! # Ruta /files
//! src/router/files.rs
//!
//! GET lee un archivo del directorio servido y lo devuelve como
//! `application/octet-stream`; POST escribe la línea de body del request
//! como contenido del archivo.
//!
//! El nombre de archivo se concatena con el directorio servido tal cual,
//! sin sanitizar traversal: quien opera el servidor es responsable de
//! confiar en sus clientes.

use crate::http::{Request, Response, StatusCode};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Maneja un request cuyo path empieza con "/files"
///
/// El nombre de archivo es el tercer segmento del path separado por '/'
/// (índice 2). Path sin ese segmento → 400. Sin directorio configurado no
/// hay nada que leer ni dónde escribir → 404.
pub fn handle(request: &Request, directory: Option<&Path>) -> Response {
    let segments: Vec<&str> = request.path().split('/').collect();

    // Indexar segments[2] directamente sería un panic con "/files" a secas
    let file_name = match segments.get(2) {
        Some(name) => *name,
        None => return Response::new(StatusCode::BadRequest),
    };

    let directory = match directory {
        Some(dir) => dir,
        None => return Response::new(StatusCode::NotFound),
    };

    let file_path = directory.join(file_name);

    match request.method() {
        "GET" => match fs::read(&file_path) {
            Ok(data) => Response::new(StatusCode::Ok)
                .with_content_type("application/octet-stream")
                .with_body_bytes(data),
            // Cualquier fallo de lectura (no existe, permisos) → 404 pelado
            Err(_) => Response::new(StatusCode::NotFound),
        },
        "POST" => match write_file(&file_path, request.body_line()) {
            Ok(()) => Response::new(StatusCode::Created),
            // El fallo de escritura también mapea a 404, no a un 5xx
            Err(_) => Response::new(StatusCode::NotFound),
        },
        _ => Response::new(StatusCode::NotFound),
    }
}

/// Crea o trunca el archivo con permisos rw-r--r-- y escribe el contenido
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())
}
