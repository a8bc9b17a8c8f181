use rand::Rng;

/// Creates a `Reminder` identifier from a timestamp in millis and a random suffix,
/// e.g. `id17123456789040042`
pub fn create_reminder_id(timestamp_millis: i64) -> String {
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("id{}{:04}", timestamp_millis, suffix)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_id_with_timestamp_and_suffix() {
        let id = create_reminder_id(1712345678904);
        assert!(id.starts_with("id1712345678904"));
        assert_eq!(id.len(), "id1712345678904".len() + 4);
        assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
    }
}
