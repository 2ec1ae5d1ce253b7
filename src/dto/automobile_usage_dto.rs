use serde::Serialize;

/// Envoltura de las respuestas exitosas del servicio de uso.
///
/// El contrato del recurso es `{ok: true, automobileUsage: ...}` tanto
/// para un registro como para el listado; las fallas se serializan desde
/// `UsageError` como `{ok: false, why, status}`.
#[derive(Debug, Serialize)]
pub struct UsageEnvelope<T> {
    pub ok: bool,
    #[serde(rename = "automobileUsage")]
    pub automobile_usage: T,
}

impl<T> UsageEnvelope<T> {
    pub fn new(automobile_usage: T) -> Self {
        Self {
            ok: true,
            automobile_usage,
        }
    }
}
