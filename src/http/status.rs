//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado HTTP/1.1 que usa el servidor.
//! Solo incluimos los que las cuatro rutas pueden producir:
//!
//! - **2xx**: Éxito (200 OK, 201 Created)
//! - **4xx**: Error del cliente (400, 404)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - El recurso fue creado (POST /files exitoso)
    Created = 201,

    /// 400 Bad Request - Request line o path malformado
    BadRequest = 400,

    /// 404 Not Found - Ruta o archivo no encontrado (también se reutiliza
    /// para fallos de escritura, ver el handler de /files)
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http::http::StatusCode;
    /// assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado para mostrarlo
    ///
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::Created.as_u16(), 201);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::Created.reason_phrase(), "Created");
        assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    }

    #[test]
    fn test_is_success() {
        assert!(StatusCode::Ok.is_success());
        assert!(StatusCode::Created.is_success());
        assert!(!StatusCode::BadRequest.is_success());
        assert!(!StatusCode::NotFound.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::Created.to_string(), "201 Created");
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
    }
}
