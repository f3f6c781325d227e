use uuid::Uuid;

/// Length of a public embed identifier.
pub const EMBED_ID_LEN: usize = 8;

/// Generate a fresh short identifier: the leading hex digits of a random
/// v4 UUID. Collisions are possible in theory; the store rejects them.
pub fn generate_embed_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(EMBED_ID_LEN);
    id
}
