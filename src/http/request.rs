//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser HTTP desde cero, sobre el buffer crudo
//! que el servidor leyó del socket.
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: una única línea final (solo usada por POST /files)
//!
//! El servidor hace una sola lectura de tamaño fijo por conexión, así que
//! el buffer puede venir truncado o con padding de NULs; el parser trabaja
//! sobre lo que haya.

use std::collections::HashMap;

/// Representa un request HTTP parseado
///
/// Inmutable después de construirse: se parsea una vez por conexión y se
/// descarta cuando el handler termina.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET", "POST")
    method: String,

    /// Path de la petición (ej: "/echo/hola")
    path: String,

    /// Versión HTTP (ej: "HTTP/1.1")
    version: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    headers: HashMap<String, String>,

    /// Última línea cruda del request; para POST es el contenido del body
    body_line: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío (solo whitespace o NULs)
    EmptyRequest,

    /// La request line no tiene los 3 campos `METHOD PATH VERSION`
    MalformedRequestLine(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::MalformedRequestLine(line) => {
                write!(f, "Malformed request line: {:?}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Extrae los headers de las líneas de un request
///
/// Las líneas de headers ocupan `lines[1..last]`. Para un método sin body
/// (GET) el bloque de headers llega hasta el final; para cualquier otro
/// método la última línea se reserva para el body y queda fuera.
///
/// Reglas:
/// - Líneas sin `:` se ignoran en silencio (incluye la línea vacía que
///   separa headers del body).
/// - Se separa solo en el primer `:`; nombre y valor se recortan de
///   whitespace (eso también elimina el `\r` final de cada línea).
/// - Headers duplicados: gana la última aparición.
fn extract_headers(method: &str, lines: &[&str]) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    let last_header = if method == "GET" {
        lines.len()
    } else {
        lines.len().saturating_sub(1)
    };

    for line in lines.iter().take(last_header).skip(1) {
        if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim().to_string();
            let value = line[colon_pos + 1..].trim().to_string();
            headers.insert(name, value);
        }
    }

    headers
}

impl Request {
    /// Parsea un request HTTP desde el buffer leído del socket
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - Buffer vacío o request line sin 3 campos
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /echo/hola HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/echo/hola");
    /// assert_eq!(request.header("Host"), Some("localhost:4221"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Conversión lossy: un request con bytes no-UTF8 no debe tirar el
        // handler, simplemente no va a matchear ninguna ruta
        let request_str = String::from_utf8_lossy(buffer);

        if request_str.trim_matches(|c: char| c.is_whitespace() || c == '\0').is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Separar por '\n'; el '\r' residual se recorta al trimear
        let lines: Vec<&str> = request_str.split('\n').collect();

        // 1. Parsear la request line (primera línea)
        let request_line = lines[0];
        let fields: Vec<&str> = request_line.split_whitespace().collect();

        // Debe tener al menos 3 campos: METHOD PATH VERSION.
        // Indexar sin este guard sería un panic con input hostil.
        if fields.len() < 3 {
            return Err(ParseError::MalformedRequestLine(request_line.trim().to_string()));
        }

        let method = fields[0].to_string();
        let path = fields[1].to_string();
        let version = fields[2].to_string();

        // 2. Extraer headers (el bloque depende de si el método lleva body)
        let headers = extract_headers(&method, &lines);

        // 3. Última línea cruda; la lectura es de tamaño fijo, así que
        // recortamos el padding de NULs
        let body_line = lines
            .last()
            .map(|line| line.trim_matches('\0').to_string())
            .unwrap_or_default();

        Ok(Request {
            method,
            path,
            version,
            headers,
            body_line,
        })
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::Request;
    ///
    /// let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.header("User-Agent"), Some("foo/1.0"));
    /// assert_eq!(request.header("Missing"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene la última línea cruda del request (el body para POST)
    pub fn body_line(&self) -> &str {
        &self.body_line
    }
}
