use uuid::Uuid;

/// Mint a fresh identifier for an admin order that omitted one.
///
/// Caller-supplied IDs are the norm; generated IDs only back-fill blank
/// fields on CreateAdmin/CreatePolity/CreateSystem orders.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// True if `id` is usable as-is: non-empty and already in trimmed,
/// sanitized form. IDs are never cleaned up silently — a caller that
/// sends a dirty ID gets a refusal, not a mutation.
pub fn is_well_formed(id: &str) -> bool {
    !id.is_empty() && id == crate::model::text::sanitize(id).trim()
}
